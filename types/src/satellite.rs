//! Control of remote satellites (microphone and speaker devices).

use crate::eventable::unit_eventable;

unit_eventable! {
    /// `run-satellite` event: the server asks the satellite to start.
    RunSatellite => "run-satellite"
}

unit_eventable! {
    /// `pause-satellite` event: the server asks the satellite to pause.
    PauseSatellite => "pause-satellite"
}

unit_eventable! {
    /// `streaming-started` event: the satellite began streaming audio.
    StreamingStarted => "streaming-started"
}

unit_eventable! {
    /// `streaming-stopped` event: the satellite stopped streaming audio.
    StreamingStopped => "streaming-stopped"
}

unit_eventable! {
    /// `satellite-connected` event: a satellite connected to the server.
    SatelliteConnected => "satellite-connected"
}

unit_eventable! {
    /// `satellite-disconnected` event: a satellite disconnected from the server.
    SatelliteDisconnected => "satellite-disconnected"
}
