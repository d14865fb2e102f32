use mongodb::bson::{doc, Document};
use serde::Serialize;
use serde_json::Value;

use super::document::json_to_bson;
use crate::utils::AppError;

pub const COLLECTION: &str = "coffees";

/// The field set a replace overwrites. Anything else in the body is ignored.
#[derive(Debug, Default, Serialize, utoipa::ToSchema)]
pub struct CoffeeFields {
    #[schema(value_type = Option<String>)]
    pub name: Option<Value>,
    #[schema(value_type = Option<f64>)]
    pub price: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub category: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub chef: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub supplier: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub taste: Option<Value>,
    #[serde(rename = "photoUrl")]
    #[schema(value_type = Option<String>)]
    pub photo_url: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub details: Option<Value>,
}

impl CoffeeFields {
    /// Reads each field by name. A body that is not an object has none.
    pub fn from_body(body: &Value) -> Self {
        let field = |name: &str| body.get(name).cloned();
        Self {
            name: field("name"),
            price: field("price"),
            category: field("category"),
            chef: field("chef"),
            supplier: field("supplier"),
            taste: field("taste"),
            photo_url: field("photoUrl"),
            details: field("details"),
        }
    }

    /// `$set` of all eight fields; absent ones are written as null.
    pub fn replace_update(&self) -> Result<Document, AppError> {
        Ok(doc! {
            "$set": {
                "name": json_to_bson(self.name.as_ref())?,
                "price": json_to_bson(self.price.as_ref())?,
                "category": json_to_bson(self.category.as_ref())?,
                "chef": json_to_bson(self.chef.as_ref())?,
                "supplier": json_to_bson(self.supplier.as_ref())?,
                "taste": json_to_bson(self.taste.as_ref())?,
                "photoUrl": json_to_bson(self.photo_url.as_ref())?,
                "details": json_to_bson(self.details.as_ref())?,
            }
        })
    }
}
