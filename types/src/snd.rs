//! Sound output.

use crate::eventable::unit_eventable;

unit_eventable! {
    /// `played` event: audio has finished playing.
    Played => "played"
}
