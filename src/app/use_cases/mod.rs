//! Use-Cases der Application-Layer-Orchestrierung.

pub mod file_io;
pub mod ordering;
pub mod selection;
