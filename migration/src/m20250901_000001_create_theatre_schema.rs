use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum Authors {
    Table,
    Id,
    FullName,
    Biography,
    BirthDate,
}

#[derive(DeriveIden)]
enum Genres {
    Table,
    Id,
    Name,
    Description,
}

#[derive(DeriveIden)]
enum Halls {
    Table,
    Id,
    Name,
    Capacity,
    Description,
}

#[derive(DeriveIden)]
enum Seats {
    Table,
    Id,
    HallId,
    Row,
    Number,
    IsVip,
}

#[derive(DeriveIden)]
enum Performances {
    Table,
    Id,
    Title,
    Description,
    PerformanceDate,
    DurationMinutes,
    BasePriceCents,
    AuthorId,
    GenreId,
    HallId,
}

#[derive(DeriveIden)]
enum Tickets {
    Table,
    Id,
    PerformanceId,
    SeatId,
    PriceCents,
    IsSold,
    PurchaseDate,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Authors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Authors::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Authors::FullName).string_len(100).not_null())
                    .col(ColumnDef::new(Authors::Biography).string_len(1000).not_null())
                    .col(ColumnDef::new(Authors::BirthDate).date().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Genres::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Genres::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Genres::Name).string_len(50).not_null())
                    .col(ColumnDef::new(Genres::Description).string_len(500).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Halls::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Halls::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Halls::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Halls::Capacity).integer().not_null())
                    .col(ColumnDef::new(Halls::Description).string_len(500).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Seats::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Seats::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Seats::HallId).integer().not_null())
                    .col(ColumnDef::new(Seats::Row).integer().not_null())
                    .col(ColumnDef::new(Seats::Number).integer().not_null())
                    .col(ColumnDef::new(Seats::IsVip).boolean().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_seats_hall")
                            .from(Seats::Table, Seats::HallId)
                            .to(Halls::Table, Halls::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // a seat is unique within its hall by (row, number)
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_seats_hall_row_number")
                    .table(Seats::Table)
                    .col(Seats::HallId)
                    .col(Seats::Row)
                    .col(Seats::Number)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Performances::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Performances::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Performances::Title).string_len(200).not_null())
                    .col(
                        ColumnDef::new(Performances::Description)
                            .string_len(1000)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Performances::PerformanceDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Performances::DurationMinutes).integer().not_null())
                    .col(
                        ColumnDef::new(Performances::BasePriceCents)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Performances::AuthorId).integer().not_null())
                    .col(ColumnDef::new(Performances::GenreId).integer().not_null())
                    .col(ColumnDef::new(Performances::HallId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_performances_author")
                            .from(Performances::Table, Performances::AuthorId)
                            .to(Authors::Table, Authors::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_performances_genre")
                            .from(Performances::Table, Performances::GenreId)
                            .to(Genres::Table, Genres::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_performances_hall")
                            .from(Performances::Table, Performances::HallId)
                            .to(Halls::Table, Halls::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_performances_hall_id")
                    .table(Performances::Table)
                    .col(Performances::HallId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Tickets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tickets::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Tickets::PerformanceId).integer().not_null())
                    .col(ColumnDef::new(Tickets::SeatId).integer().not_null())
                    .col(ColumnDef::new(Tickets::PriceCents).big_integer().not_null())
                    .col(ColumnDef::new(Tickets::IsSold).boolean().not_null())
                    .col(
                        ColumnDef::new(Tickets::PurchaseDate)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tickets_performance")
                            .from(Tickets::Table, Tickets::PerformanceId)
                            .to(Performances::Table, Performances::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tickets_seat")
                            .from(Tickets::Table, Tickets::SeatId)
                            .to(Seats::Table, Seats::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // one ticket per (performance, seat) once generated
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_tickets_performance_seat")
                    .table(Tickets::Table)
                    .col(Tickets::PerformanceId)
                    .col(Tickets::SeatId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_tickets_performance_id")
                    .table(Tickets::Table)
                    .col(Tickets::PerformanceId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tickets::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Performances::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Seats::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Halls::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Genres::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Authors::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}
