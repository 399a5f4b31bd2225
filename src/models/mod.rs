pub mod daily;
pub mod location;
pub mod presence;
pub mod punch;
pub mod record;
pub mod roster;
pub mod scan_kind;
pub mod shift;
