use super::{CatapultError, QueryBuilder, ResourceClient, RestDriver};
use crate::domain::{AvailableNumber, JsonObject};
use crate::transport;

/// Search for numbers that can be allocated (`availableNumbers`).
#[derive(Debug, Clone)]
pub struct AvailableNumbers {
    resource: ResourceClient,
}

impl AvailableNumbers {
    pub fn new(driver: RestDriver) -> Self {
        Self {
            resource: ResourceClient::new(driver, "availableNumbers"),
        }
    }

    pub fn uri(&self) -> &str {
        self.resource.uri()
    }

    /// Local numbers (`availableNumbers/local`); a search needs at least one
    /// of city, state, zip or area code.
    pub fn search_local(&self) -> QueryBuilder<AvailableNumber> {
        QueryBuilder::new(self.resource.clone(), "local", available_number)
    }

    /// Toll-free numbers (`availableNumbers/tollFree`).
    pub fn search_toll_free(&self) -> QueryBuilder<AvailableNumber> {
        QueryBuilder::new(self.resource.clone(), "tollFree", available_number)
    }
}

fn available_number(
    _owner: &ResourceClient,
    object: JsonObject,
) -> Result<AvailableNumber, CatapultError> {
    transport::decode_available_number(object).map_err(CatapultError::parse)
}

impl QueryBuilder<AvailableNumber> {
    pub fn city(self, city: impl Into<String>) -> Self {
        self.param("city", city.into())
    }

    /// Two-letter state code.
    pub fn state(self, state: impl Into<String>) -> Self {
        self.param("state", state.into())
    }

    pub fn zip(self, zip: impl Into<String>) -> Self {
        self.param("zip", zip.into())
    }

    pub fn area_code(self, area_code: impl Into<String>) -> Self {
        self.param("areaCode", area_code.into())
    }

    pub fn local_number(self, local_number: impl Into<String>) -> Self {
        self.param("localNumber", local_number.into())
    }

    pub fn in_local_calling_area(self, in_area: bool) -> Self {
        self.param("inLocalCallingArea", in_area)
    }

    /// Digit pattern; `*` matches any digit.
    pub fn pattern(self, pattern: impl Into<String>) -> Self {
        self.param("pattern", pattern.into())
    }

    pub fn quantity(self, quantity: u32) -> Self {
        self.param("quantity", quantity)
    }
}
