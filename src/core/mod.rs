pub mod add;
pub mod audit_view;
pub mod backup;
pub mod del;
pub mod listview;
pub mod metrics;
pub mod restore;
pub mod settings;
pub mod status;
pub mod targets;
