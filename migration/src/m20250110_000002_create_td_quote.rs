use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TdQuote::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(TdQuote::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(TdQuote::Value).text().not_null())
                    .col(ColumnDef::new(TdQuote::By).text().not_null())
                    .col(ColumnDef::new(TdQuote::Date).string().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TdQuote::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TdQuote {
    Table,
    Id,
    Value,
    By,
    Date,
}
