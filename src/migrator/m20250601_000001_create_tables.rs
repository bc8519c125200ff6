use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(pk_auto(Users::Id))
                    .col(string_uniq(Users::Email))
                    .col(string(Users::PasswordHash))
                    .col(boolean(Users::IsActive).default(true))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Characters::Table)
                    .if_not_exists()
                    .col(pk_auto(Characters::Id))
                    .col(string_uniq(Characters::Name))
                    .col(string(Characters::EyeColor))
                    .col(string(Characters::HairColor))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Planets::Table)
                    .if_not_exists()
                    .col(pk_auto(Planets::Id))
                    .col(string_uniq(Planets::Name))
                    .col(string(Planets::Gravity))
                    .col(string(Planets::Climate))
                    .col(string(Planets::Population))
                    .col(string(Planets::RotationPeriod))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Films::Table)
                    .if_not_exists()
                    .col(pk_auto(Films::Id))
                    .col(string_uniq(Films::Name))
                    .col(string(Films::Created))
                    .col(string(Films::Edited))
                    .col(string(Films::Producer))
                    .col(string(Films::Title))
                    .col(string(Films::Director))
                    .to_owned(),
            )
            .await?;

        // Targets are all nullable; at least one is required by the favorites service.
        manager
            .create_table(
                Table::create()
                    .table(Favorites::Table)
                    .if_not_exists()
                    .col(pk_auto(Favorites::Id))
                    .col(integer(Favorites::UserId))
                    .col(integer_null(Favorites::CharacterId))
                    .col(integer_null(Favorites::PlanetsId))
                    .col(integer_null(Favorites::FilmsId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorites_user")
                            .from(Favorites::Table, Favorites::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorites_character")
                            .from(Favorites::Table, Favorites::CharacterId)
                            .to(Characters::Table, Characters::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorites_planet")
                            .from(Favorites::Table, Favorites::PlanetsId)
                            .to(Planets::Table, Planets::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorites_film")
                            .from(Favorites::Table, Favorites::FilmsId)
                            .to(Films::Table, Films::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_favorites_user_id")
                    .table(Favorites::Table)
                    .col(Favorites::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Favorites::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Films::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Planets::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Characters::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Email,
    PasswordHash,
    IsActive,
}

#[derive(DeriveIden)]
enum Characters {
    Table,
    Id,
    Name,
    EyeColor,
    HairColor,
}

#[derive(DeriveIden)]
enum Planets {
    Table,
    Id,
    Name,
    Gravity,
    Climate,
    Population,
    RotationPeriod,
}

#[derive(DeriveIden)]
enum Films {
    Table,
    Id,
    Name,
    Created,
    Edited,
    Producer,
    Title,
    Director,
}

#[derive(DeriveIden)]
enum Favorites {
    Table,
    Id,
    UserId,
    CharacterId,
    PlanetsId,
    FilmsId,
}
