mod intent;
mod reducer;
mod state;

pub use intent::SetupIntent;
pub use reducer::SetupReducer;
pub use state::{SetupField, SetupState};
