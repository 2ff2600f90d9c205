pub mod paperio;
