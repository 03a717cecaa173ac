pub mod health;
pub mod repairs;
pub mod rooms;
pub mod settings;
pub mod system;
pub mod tenants;
