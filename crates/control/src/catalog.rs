use scheduler_models::GroceryStore;

/// Fixture catalog of grocery stores.
///
/// Stands in for a real store directory; `nearby` returns the head of the
/// catalog until a geocoder ranks stores by actual distance.
pub struct StoreCatalog {
    stores: Vec<GroceryStore>,
    nearby_count: usize,
}

impl StoreCatalog {
    pub fn with_builtin_stores() -> Self {
        let stores = vec![
            store("1", "Whole Foods Market", "100 Organic St", 40.7128, -74.0060),
            store("2", "Trader Joe's", "200 Affordable Ave", 40.7589, -73.9851),
            store("3", "Safeway", "300 Convenient Blvd", 40.7505, -73.9934),
            store("4", "Target Grocery", "400 Everything Dr", 40.7282, -73.7949),
        ];
        Self {
            stores,
            nearby_count: 2,
        }
    }

    pub fn all(&self) -> &[GroceryStore] {
        &self.stores
    }

    pub fn nearby(&self, _home_address: &str) -> Vec<GroceryStore> {
        self.stores.iter().take(self.nearby_count).cloned().collect()
    }
}

fn store(id: &str, name: &str, address: &str, lat: f64, lng: f64) -> GroceryStore {
    GroceryStore {
        id: id.to_string(),
        name: name.to_string(),
        address: address.to_string(),
        lat,
        lng,
        distance_km: None,
    }
}
