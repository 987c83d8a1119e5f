//! Core-Domänentypen: Fahrzeuge, doppelte Fahrzeugliste, Backups, Manager.

pub mod backup;
pub mod error;
/// Einzelnes Fahrzeug mit abgeleiteten Anzeigefeldern
pub mod vehicle;
pub mod vehicle_list;
pub mod vehicle_manager;

pub use backup::{
    backup_file_name, create_backup, is_backup_file_name, list_backups, vehicles_path, BackupFile,
    VEHICLES_FILE_NAME,
};
pub use error::SorterError;
pub use vehicle::{Vehicle, NO_LICENSE_PLATES};
pub use vehicle_list::{VehicleFilter, VehicleList};
pub use vehicle_manager::{VehicleDetails, VehicleManager, NOTHING_LABEL};
