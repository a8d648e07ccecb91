use polish_tracker::models::{
    Brand, Collection, CreateBrand, CreateCollection, CreateLocation, CreatePolish, CreateWorn,
    CreateWornLayer, CreateWornPhoto, Location, Polish, PolishType, Worn, WornLayer, WornPhoto,
};
use polish_tracker::repositories::{
    BrandRepository, CollectionRepository, LocationRepository, PolishRepository, Repository,
    WornLayerRepository, WornPhotoRepository, WornRepository,
};
use polish_tracker::state::AppState;

/// Factory for creating test data
pub struct Factory<'a> {
    state: &'a AppState,
}

#[allow(dead_code)]
impl<'a> Factory<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    pub async fn create_brand(&self, name: &str) -> Brand {
        let input = CreateBrand {
            name: name.to_string(),
        };
        BrandRepository::create(&self.state.db, &input).await.unwrap()
    }

    pub async fn create_location(&self, name: &str) -> Location {
        let input = CreateLocation {
            name: name.to_string(),
        };
        LocationRepository::create(&self.state.db, &input)
            .await
            .unwrap()
    }

    pub async fn create_collection(&self, brand_id: i32, name: &str) -> Collection {
        let input = CreateCollection {
            brand_id,
            name: name.to_string(),
        };
        CollectionRepository::create(&self.state.db, &input)
            .await
            .unwrap()
    }

    /// Create a polish with default shade, type and availability
    pub async fn create_polish(&self, brand_id: i32, location_id: i32, name: &str) -> Polish {
        self.create_polish_with(CreatePolish {
            brand_id,
            location_id,
            name: name.to_string(),
            product_url: None,
            is_available: None,
            shade: None,
            polish_type: None,
            collection_id: None,
        })
        .await
    }

    pub async fn create_polish_in_collection(
        &self,
        brand_id: i32,
        location_id: i32,
        collection_id: i32,
        name: &str,
    ) -> Polish {
        self.create_polish_with(CreatePolish {
            brand_id,
            location_id,
            name: name.to_string(),
            product_url: None,
            is_available: None,
            shade: None,
            polish_type: None,
            collection_id: Some(collection_id),
        })
        .await
    }

    pub async fn create_polish_with(&self, input: CreatePolish) -> Polish {
        PolishRepository::create(&self.state.db, &input)
            .await
            .unwrap()
    }

    pub async fn create_worn(&self, notes: Option<&str>) -> Worn {
        let input = CreateWorn {
            notes: notes.map(str::to_string),
        };
        WornRepository::create(&self.state.db, &input).await.unwrap()
    }

    pub async fn create_photo(&self, worn_id: i32, photo_type: &str) -> WornPhoto {
        let input = CreateWornPhoto {
            worn_id,
            photo_type: photo_type.to_string(),
            image: format!("worn/{}-{}.jpg", worn_id, photo_type),
            notes: None,
        };
        WornPhotoRepository::create(&self.state.db, &input)
            .await
            .unwrap()
    }

    pub async fn create_layer(
        &self,
        worn_id: i32,
        order: i32,
        layer_type: PolishType,
        polish_id: i32,
    ) -> WornLayer {
        let input = CreateWornLayer {
            worn_id,
            order,
            layer_type: Some(layer_type),
            polish_id,
        };
        WornLayerRepository::create(&self.state.db, &input)
            .await
            .unwrap()
    }
}
