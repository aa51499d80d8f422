use std::marker::PhantomData;

use sea_orm::sea_query::IntoCondition;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    ModelTrait, PaginatorTrait, PrimaryKeyTrait, QueryFilter,
};

use crate::error::AppResult;

/// Generic data-access contract shared by every entity: get-all, find by
/// predicate, single lookup, add, add-many, update, remove, remove-many.
/// Services receive the repositories they need at construction time.
#[derive(Clone)]
pub struct Repository<E>
where
    E: EntityTrait,
{
    db: DatabaseConnection,
    entity: PhantomData<E>,
}

impl<E> Repository<E>
where
    E: EntityTrait,
    E::Model: Send + Sync,
{
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            entity: PhantomData,
        }
    }

    pub async fn get_all(&self) -> AppResult<Vec<E::Model>> {
        Ok(E::find().all(&self.db).await?)
    }

    pub async fn find<F>(&self, filter: F) -> AppResult<Vec<E::Model>>
    where
        F: IntoCondition,
    {
        Ok(E::find().filter(filter).all(&self.db).await?)
    }

    pub async fn get_one<F>(&self, filter: F) -> AppResult<Option<E::Model>>
    where
        F: IntoCondition,
    {
        Ok(E::find().filter(filter).one(&self.db).await?)
    }

    pub async fn get_by_id<K>(&self, id: K) -> AppResult<Option<E::Model>>
    where
        K: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
    {
        Ok(E::find_by_id(id).one(&self.db).await?)
    }

    pub async fn count<F>(&self, filter: F) -> AppResult<u64>
    where
        F: IntoCondition,
    {
        Ok(E::find().filter(filter).count(&self.db).await?)
    }

    pub async fn add<A>(&self, entity: A) -> AppResult<E::Model>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        Ok(entity.insert(&self.db).await?)
    }

    /// Persists the whole batch in a single insert statement. The batch must
    /// not be empty.
    pub async fn add_many<A, I>(&self, entities: I) -> AppResult<u64>
    where
        A: ActiveModelTrait<Entity = E>,
        I: IntoIterator<Item = A>,
        E::Model: IntoActiveModel<A>,
    {
        Ok(E::insert_many(entities)
            .exec_without_returning(&self.db)
            .await?)
    }

    pub async fn update<A>(&self, entity: A) -> AppResult<E::Model>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        Ok(entity.update(&self.db).await?)
    }

    pub async fn remove<A>(&self, entity: E::Model) -> AppResult<u64>
    where
        E::Model: IntoActiveModel<A>,
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
    {
        let result = entity.delete(&self.db).await?;
        Ok(result.rows_affected)
    }

    pub async fn remove_many<F>(&self, filter: F) -> AppResult<u64>
    where
        F: IntoCondition,
    {
        let result = E::delete_many().filter(filter).exec(&self.db).await?;
        Ok(result.rows_affected)
    }
}
