mod nap;

pub use nap::NapCommands;
