use std::collections::BTreeMap;

/// One mailing-list entry, keyed by the normalized field vocabulary.
///
/// The address fields are fixed; columns that normalize to anything else
/// land in `extras` and pass through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressRow {
    pub prefix: String,
    pub first_name: String,
    pub last_name: String,
    pub address1: String,
    pub address2: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    pub extras: BTreeMap<String, String>,
}

impl AddressRow {
    /// Store a value under a normalized field name.
    pub fn set(&mut self, field: &str, value: impl Into<String>) {
        let value = value.into();
        match field {
            "prefix" => self.prefix = value,
            "first_name" => self.first_name = value,
            "last_name" => self.last_name = value,
            "address1" => self.address1 = value,
            "address2" => self.address2 = value,
            "city" => self.city = value,
            "state" => self.state = value,
            "zip" => self.zip = value,
            "country" => self.country = value,
            _ => {
                self.extras.insert(field.to_string(), value);
            }
        }
    }

    /// A row with no street address and no city carries nothing worth
    /// printing on a label.
    pub fn is_empty_address(&self) -> bool {
        self.address1.trim().is_empty()
            && self.address2.trim().is_empty()
            && self.city.trim().is_empty()
    }
}
