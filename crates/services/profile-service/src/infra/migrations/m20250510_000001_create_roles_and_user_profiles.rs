//! Migration: Create roles and user_profiles tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Roles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Roles::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Roles::Name).string_len(50).not_null())
                    .col(ColumnDef::new(Roles::Guid).uuid().not_null())
                    .col(
                        ColumnDef::new(Roles::CreatedOn)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Roles::UpdatedOn)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Role names are unique; guids are not, since a nil guid is allowed more than once
        manager
            .create_index(
                Index::create()
                    .name("idx_roles_name")
                    .table(Roles::Table)
                    .col(Roles::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UserProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserProfiles::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserProfiles::Name).string_len(100).not_null())
                    .col(ColumnDef::new(UserProfiles::Email).string_len(255).not_null())
                    .col(ColumnDef::new(UserProfiles::Bio).string_len(500).null())
                    .col(ColumnDef::new(UserProfiles::RoleId).big_integer().not_null())
                    .col(
                        ColumnDef::new(UserProfiles::ReceiveNewsletter)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(UserProfiles::Guid).uuid().not_null())
                    .col(
                        ColumnDef::new(UserProfiles::CreatedOn)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserProfiles::UpdatedOn)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_profiles_role_id")
                            .from(UserProfiles::Table, UserProfiles::RoleId)
                            .to(Roles::Table, Roles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_profiles_role_id")
                    .table(UserProfiles::Table)
                    .col(UserProfiles::RoleId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_profiles_email")
                    .table(UserProfiles::Table)
                    .col(UserProfiles::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_profiles_guid")
                    .table(UserProfiles::Table)
                    .col(UserProfiles::Guid)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop the dependent table first
        manager
            .drop_table(Table::drop().table(UserProfiles::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Roles::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Roles {
    Table,
    Id,
    Name,
    Guid,
    CreatedOn,
    UpdatedOn,
}

#[derive(Iden)]
enum UserProfiles {
    Table,
    Id,
    Name,
    Email,
    Bio,
    RoleId,
    ReceiveNewsletter,
    Guid,
    CreatedOn,
    UpdatedOn,
}
