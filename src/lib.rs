//! FS25 Vehicle Sorter Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod xml;

pub use app::{AppCommand, AppController, AppIntent, AppState, SelectionState, UiState};
pub use core::{SorterError, Vehicle, VehicleDetails, VehicleFilter, VehicleList, VehicleManager};
pub use shared::SorterOptions;
pub use xml::{parse_vehicles_xml, write_vehicles_xml, VehiclesDocument};
