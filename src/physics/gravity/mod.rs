pub mod gravity;
