use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create rooms table
        manager
            .create_table(
                Table::create()
                    .table(Rooms::Table)
                    .if_not_exists()
                    .col(pk_auto(Rooms::Id))
                    .col(string(Rooms::RoomNumber).unique_key())
                    .col(string(Rooms::RoomType))
                    .col(string_len(Rooms::Status, 20).default("vacant"))
                    .to_owned(),
            )
            .await?;

        // Create tenants table
        manager
            .create_table(
                Table::create()
                    .table(Tenants::Table)
                    .if_not_exists()
                    .col(pk_uuid(Tenants::Id))
                    .col(string(Tenants::FirstName).default(""))
                    .col(string(Tenants::LastName).default(""))
                    .col(string(Tenants::Phone).default(""))
                    .col(string(Tenants::Address).default(""))
                    .col(string_null(Tenants::Email))
                    .col(integer_null(Tenants::RoomId))
                    .col(timestamp_with_time_zone(Tenants::CreatedAt))
                    .col(timestamp_with_time_zone(Tenants::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tenant_room")
                            .from(Tenants::Table, Tenants::RoomId)
                            .to(Rooms::Table, Rooms::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create repairs table
        manager
            .create_table(
                Table::create()
                    .table(Repairs::Table)
                    .if_not_exists()
                    .col(pk_auto(Repairs::Id))
                    .col(integer_null(Repairs::RoomId))
                    .col(string(Repairs::RepairType))
                    .col(string_len(Repairs::Status, 20).default("pending"))
                    .col(string_null(Repairs::Description))
                    .col(timestamp_with_time_zone(Repairs::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_repair_room")
                            .from(Repairs::Table, Repairs::RoomId)
                            .to(Rooms::Table, Rooms::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create system_settings table (single row, id = 1)
        manager
            .create_table(
                Table::create()
                    .table(SystemSettings::Table)
                    .if_not_exists()
                    .col(integer(SystemSettings::Id).primary_key())
                    .col(decimal_len(SystemSettings::WaterRate, 19, 4))
                    .col(decimal_len(SystemSettings::ElectricityRate, 19, 4))
                    .col(decimal_len(SystemSettings::LateFee, 19, 4))
                    .col(decimal_len(SystemSettings::DepositRate, 19, 4))
                    .col(timestamp_with_time_zone(SystemSettings::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // Reports group on these columns
        manager
            .create_index(
                Index::create()
                    .name("idx_repairs_repair_type")
                    .table(Repairs::Table)
                    .col(Repairs::RepairType)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_rooms_room_type")
                    .table(Rooms::Table)
                    .col(Rooms::RoomType)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SystemSettings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Repairs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Tenants::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Rooms::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Rooms {
    Table,
    Id,
    RoomNumber,
    RoomType,
    Status,
}

#[derive(DeriveIden)]
enum Tenants {
    Table,
    Id,
    FirstName,
    LastName,
    Phone,
    Address,
    Email,
    RoomId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Repairs {
    Table,
    Id,
    RoomId,
    RepairType,
    Status,
    Description,
    CreatedAt,
}

#[derive(DeriveIden)]
enum SystemSettings {
    Table,
    Id,
    WaterRate,
    ElectricityRate,
    LateFee,
    DepositRate,
    UpdatedAt,
}
