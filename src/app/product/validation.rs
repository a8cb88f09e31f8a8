//! 创建和更新请求体的校验

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde_json::{Map, Value};

use super::model::ProductInput;
use crate::core::error::CoreError;

const REQUIRED_FIELDS_MESSAGE: &str = "Validation Error: 'name', 'description', 'price', 'category', and 'inStock' are required fields.";
const INVALID_TYPES_MESSAGE: &str = "Validation Error: Invalid data types. Ensure name, description, and category are strings; price is a number; and inStock is a boolean.";

/// 校验 JSON 请求体并转换成 [`ProductInput`]
///
/// 必填检查只看字段是否存在且不为 `null`，`price: 0` 与 `inStock: false` 都是合法值。
/// 字符串字段为空串时视为缺失。
pub fn validate_product(body: &Value) -> Result<ProductInput, CoreError> {
    let fields = body
        .as_object()
        .ok_or_else(|| CoreError::validation("Validation Error: request body must be a JSON object."))?;

    let name = required(fields, "name")?;
    let description = required(fields, "description")?;
    let price = required(fields, "price")?;
    let category = required(fields, "category")?;
    let in_stock = required(fields, "inStock")?;

    let invalid = || CoreError::validation(INVALID_TYPES_MESSAGE);

    let name = name.as_str().ok_or_else(invalid)?;
    let description = description.as_str().ok_or_else(invalid)?;
    let price = price.as_f64().ok_or_else(invalid)?;
    let category = category.as_str().ok_or_else(invalid)?;
    let in_stock = in_stock.as_bool().ok_or_else(invalid)?;

    Ok(ProductInput {
        name: name.to_string(),
        description: description.to_string(),
        price,
        category: category.to_string(),
        in_stock,
    })
}

fn required<'a>(fields: &'a Map<String, Value>, key: &str) -> Result<&'a Value, CoreError> {
    match fields.get(key) {
        None | Some(Value::Null) => Err(CoreError::validation(REQUIRED_FIELDS_MESSAGE)),
        Some(Value::String(s)) if s.is_empty() => {
            Err(CoreError::validation(REQUIRED_FIELDS_MESSAGE))
        }
        Some(value) => Ok(value),
    }
}

/// 请求体提取器：解析 JSON 并执行校验
///
/// 不使用 `Json<T>` 是为了让类型错误也走统一的 `ValidationError` 响应。
#[derive(Debug)]
pub struct ValidatedProduct(pub ProductInput);

#[async_trait]
impl<S> FromRequest<S> for ValidatedProduct
where
    S: Send + Sync,
{
    type Rejection = CoreError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| CoreError::validation(format!("Validation Error: {}", e.body_text())))?;

        let body: Value = if bytes.is_empty() {
            Value::Object(Map::new())
        } else {
            serde_json::from_slice(&bytes).map_err(|e| {
                CoreError::validation(format!("Validation Error: malformed JSON body ({})", e))
            })?
        };

        validate_product(&body).map(ValidatedProduct)
    }
}
