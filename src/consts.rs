pub const UNKNOWN_TYPES_VAR: &str = "WYOMING_UNKNOWN_TYPES";
