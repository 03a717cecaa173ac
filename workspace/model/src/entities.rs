//! SeaORM entities for the dormitory tables.
//! These mirror the hosted tables the console reads and writes:
//! tenants, rooms, repairs and the single-row system settings table.

pub mod repair;
pub mod room;
pub mod system_settings;
pub mod tenant;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::repair::Entity as Repair;
    pub use super::room::Entity as Room;
    pub use super::system_settings::Entity as SystemSettings;
    pub use super::tenant::Entity as Tenant;
}

#[cfg(test)]
mod test {
    use chrono::Utc;
    use migration::{Migrator, MigratorTrait};
    use rust_decimal::Decimal;
    use sea_orm::{
        ActiveModelTrait, ColumnTrait, ConnectionTrait, Database, DatabaseConnection, DbErr,
        EntityTrait, ModelTrait, PaginatorTrait, QueryFilter, Set,
    };
    use uuid::Uuid;

    use super::*;
    use prelude::*;

    async fn setup_db() -> Result<DatabaseConnection, DbErr> {
        let db = Database::connect("sqlite::memory:").await?;
        db.execute_unprepared("PRAGMA foreign_keys = ON;").await?;
        Migrator::up(&db, None).await.expect("Migrations failed.");
        Ok(db)
    }

    #[tokio::test]
    async fn test_entity_integration() -> Result<(), DbErr> {
        let db = setup_db().await?;

        let room_a = room::ActiveModel {
            room_number: Set("A101".to_string()),
            room_type: Set("Standard Single".to_string()),
            status: Set(room::RoomStatus::Occupied),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        let room_b = room::ActiveModel {
            room_number: Set("A102".to_string()),
            room_type: Set("Suite".to_string()),
            status: Set(room::RoomStatus::Vacant),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        let now = Utc::now();
        let tenant = tenant::ActiveModel {
            id: Set(Uuid::new_v4()),
            first_name: Set("Somchai".to_string()),
            last_name: Set("Jaidee".to_string()),
            phone: Set("0812345678".to_string()),
            address: Set("99 Sukhumvit Rd".to_string()),
            email: Set(Some("somchai@example.com".to_string())),
            room_id: Set(Some(room_a.id)),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&db)
        .await?;

        repair::ActiveModel {
            room_id: Set(Some(room_a.id)),
            repair_type: Set("Plumbing".to_string()),
            status: Set(repair::RepairStatus::Pending),
            description: Set(Some("Leaking tap".to_string())),
            created_at: Set(now),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        // Tenant -> room relation
        let tenant_room = tenant.find_related(Room).one(&db).await?;
        assert_eq!(tenant_room.map(|r| r.room_number), Some("A101".to_string()));

        // Status enums round-trip through the string column
        let occupied = Room::find()
            .filter(room::Column::Status.eq(room::RoomStatus::Occupied))
            .count(&db)
            .await?;
        assert_eq!(occupied, 1);

        let pending = Repair::find()
            .filter(repair::Column::Status.eq(repair::RepairStatus::Pending))
            .all(&db)
            .await?;
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].repair_type, "Plumbing");

        // Deleting a room detaches its repairs instead of deleting them
        room_a.delete(&db).await?;
        let orphan = Repair::find().one(&db).await?.expect("repair survives");
        assert_eq!(orphan.room_id, None);
        assert!(Room::find_by_id(room_b.id).one(&db).await?.is_some());

        Ok(())
    }

    #[tokio::test]
    async fn test_settings_single_row() -> Result<(), DbErr> {
        let db = setup_db().await?;

        let saved = system_settings::ActiveModel {
            id: Set(system_settings::SETTINGS_ROW_ID),
            water_rate: Set(Decimal::new(185, 1)),
            electricity_rate: Set(Decimal::new(8, 0)),
            late_fee: Set(Decimal::new(100, 0)),
            deposit_rate: Set(Decimal::new(5000, 0)),
            updated_at: Set(Utc::now()),
        }
        .insert(&db)
        .await?;

        let loaded = SystemSettings::find_by_id(system_settings::SETTINGS_ROW_ID)
            .one(&db)
            .await?
            .expect("settings row");
        assert_eq!(loaded.water_rate, saved.water_rate);
        assert_eq!(loaded.deposit_rate, Decimal::new(5000, 0));

        Ok(())
    }
}
