//! Initial schema: properties, voice_interactions, users.
//!
//! `voice_interactions.unit_id` deliberately carries no foreign-key
//! constraint; the interaction logger validates the reference before insert.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Properties::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Properties::UnitId)
                            .string_len(6)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Properties::OwnerId).string().not_null())
                    .col(
                        ColumnDef::new(Properties::Status)
                            .string_len(16)
                            .not_null()
                            .default("draft"),
                    )
                    .col(ColumnDef::new(Properties::LockCode).text())
                    .col(ColumnDef::new(Properties::LockBox).text())
                    .col(ColumnDef::new(Properties::LockInfo).text())
                    .col(ColumnDef::new(Properties::GateCode).text())
                    .col(ColumnDef::new(Properties::GateInfo).text())
                    .col(ColumnDef::new(Properties::NetworkName).text())
                    .col(ColumnDef::new(Properties::Passcode).text())
                    .col(ColumnDef::new(Properties::RouterInfo).text())
                    .col(ColumnDef::new(Properties::TvInfo).text())
                    .col(ColumnDef::new(Properties::NoSig).text())
                    .col(ColumnDef::new(Properties::LinenInfo).text())
                    .col(ColumnDef::new(Properties::Washcloths).text())
                    .col(ColumnDef::new(Properties::PackNPlay).text())
                    .col(ColumnDef::new(Properties::ExSupplyInfo).text())
                    .col(ColumnDef::new(Properties::Dishwasher).text())
                    .col(ColumnDef::new(Properties::CoffeeMaker).text())
                    .col(ColumnDef::new(Properties::GarbageInfo).text())
                    .col(ColumnDef::new(Properties::Jacuzzi).text())
                    .col(ColumnDef::new(Properties::PoolHeat).text())
                    .col(ColumnDef::new(Properties::LostAndFound).text())
                    .col(ColumnDef::new(Properties::PassLoc).text())
                    .col(ColumnDef::new(Properties::Parking).text())
                    .col(ColumnDef::new(Properties::PoolCode).text())
                    .col(ColumnDef::new(Properties::ComPoolLoc).text())
                    .col(ColumnDef::new(Properties::Clubhouse).text())
                    .col(ColumnDef::new(Properties::ManagerEmail).text())
                    .col(ColumnDef::new(Properties::ManagerTxt).text())
                    .col(ColumnDef::new(Properties::CheckIn).text())
                    .col(ColumnDef::new(Properties::CheckOut).text())
                    .col(ColumnDef::new(Properties::DeliveryInfo).text())
                    .col(ColumnDef::new(Properties::Pet).text())
                    .col(ColumnDef::new(Properties::ParkingInfo).text())
                    .col(
                        ColumnDef::new(Properties::VoiceCallsThisWeek)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Properties::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Properties::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_properties_owner_id")
                    .table(Properties::Table)
                    .col(Properties::OwnerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(VoiceInteractions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(VoiceInteractions::Id)
                            .string_len(36)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(VoiceInteractions::UnitId)
                            .string_len(6)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(VoiceInteractions::InteractionType)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(VoiceInteractions::Issue).text())
                    .col(ColumnDef::new(VoiceInteractions::CallerName).text())
                    .col(ColumnDef::new(VoiceInteractions::GuestEmail).text())
                    .col(ColumnDef::new(VoiceInteractions::PhoneNumber).text())
                    .col(
                        ColumnDef::new(VoiceInteractions::Timestamp)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_voice_interactions_unit_id")
                    .table(VoiceInteractions::Table)
                    .col(VoiceInteractions::UnitId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .string_len(36)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::Password).string().not_null())
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VoiceInteractions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Properties::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Properties {
    Table,
    UnitId,
    OwnerId,
    Status,
    LockCode,
    LockBox,
    LockInfo,
    GateCode,
    GateInfo,
    NetworkName,
    Passcode,
    RouterInfo,
    TvInfo,
    NoSig,
    LinenInfo,
    Washcloths,
    PackNPlay,
    ExSupplyInfo,
    Dishwasher,
    CoffeeMaker,
    GarbageInfo,
    Jacuzzi,
    PoolHeat,
    LostAndFound,
    PassLoc,
    Parking,
    PoolCode,
    ComPoolLoc,
    Clubhouse,
    ManagerEmail,
    ManagerTxt,
    CheckIn,
    CheckOut,
    DeliveryInfo,
    Pet,
    ParkingInfo,
    VoiceCallsThisWeek,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum VoiceInteractions {
    Table,
    Id,
    UnitId,
    InteractionType,
    Issue,
    CallerName,
    GuestEmail,
    PhoneNumber,
    Timestamp,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Email,
    Password,
    CreatedAt,
}
