// Utility Module
// File persistence for keys and messages

pub mod keyfile;
