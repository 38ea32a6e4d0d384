use proptest::prelude::*;

use crate::model::{repository::album::CreateAlbum, LocationLabel, Photo, PhotoId, Size};

pub fn arb_photo() -> impl Strategy<Value = Photo> {
    (
        0i64..10_000,
        prop::collection::vec(any::<u8>(), 1..64),
        1i32..5000,
        1i32..5000,
    )
        .prop_map(|(id, data, width, height)| Photo {
            id: PhotoId(id),
            data,
            size: Size { width, height },
        })
}

pub fn arb_location_label() -> impl Strategy<Value = LocationLabel> {
    prop_oneof![
        "[a-zA-Z ]{1,20}".prop_map(LocationLabel::Place),
        (-90.0f64..90.0, -180.0f64..180.0)
            .prop_map(|(lat, lon)| LocationLabel::Coordinates { lat, lon }),
        Just(LocationLabel::Unavailable),
    ]
}

prop_compose! {
    pub fn arb_create_album()
    (
        name in "[a-zA-Z][a-zA-Z0-9 ]{0,29}",
        photos in prop::collection::vec(arb_photo(), 1..8),
        location in arb_location_label(),
    ) -> CreateAlbum {
        CreateAlbum { name, photos, location }
    }
}
