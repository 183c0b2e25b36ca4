use crate::db::service::DbService;
use crate::types::error::AppError;
use crate::types::quote::{RQuoteCreate, RQuoteUpdate};
use crate::utils::token::new_id;
use entity::quote::{ActiveModel as QuoteActive, Column, Entity as Quote, Model as QuoteModel};
use rand_core::{OsRng, RngCore};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect, Set,
};
use uuid::Uuid;

impl DbService {
    pub async fn get_all_quotes(&self) -> Result<Vec<QuoteModel>, AppError> {
        Ok(Quote::find().all(&self.db).await?)
    }

    pub async fn get_quote(&self, id: &Uuid) -> Result<QuoteModel, AppError> {
        Quote::find_by_id(*id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)
    }

    /// One random quote among those with `display` set.
    pub async fn get_random_quote(&self) -> Result<QuoteModel, AppError> {
        let count = Quote::find()
            .filter(Column::Display.eq(true))
            .count(&self.db)
            .await?;
        if count == 0 {
            return Err(AppError::NotFound);
        }

        let offset = OsRng.next_u64() % count;
        let picked = Quote::find()
            .filter(Column::Display.eq(true))
            .offset(offset)
            .one(&self.db)
            .await?;
        if let Some(quote) = picked {
            return Ok(quote);
        }

        // The count may have shrunk between the two queries; take the
        // first visible quote rather than 404 on a stale offset.
        Quote::find()
            .filter(Column::Display.eq(true))
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)
    }

    pub async fn create_quote(&self, payload: RQuoteCreate) -> Result<QuoteModel, AppError> {
        let model = QuoteActive {
            id: Set(new_id()),
            quote: Set(payload.quote),
            display: Set(payload.display.unwrap_or(true)),
        };
        Ok(model.insert(&self.db).await?)
    }

    pub async fn update_quote(
        &self,
        id: &Uuid,
        payload: RQuoteUpdate,
    ) -> Result<QuoteModel, AppError> {
        let current = self.get_quote(id).await?;
        if payload.quote.is_none() && payload.display.is_none() {
            return Ok(current);
        }
        let mut am: QuoteActive = current.into();
        if let Some(quote) = payload.quote {
            am.quote = Set(quote);
        }
        if let Some(display) = payload.display {
            am.display = Set(display);
        }
        Ok(am.update(&self.db).await?)
    }

    pub async fn delete_quote(&self, id: &Uuid) -> Result<(), AppError> {
        let res = Quote::delete_by_id(*id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}
