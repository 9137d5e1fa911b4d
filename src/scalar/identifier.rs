nullable_scalar! {
    /// Holds a nullable UUID. Written to the driver as hyphenated text.
    #[derive(Copy)]
    Uuid { uuid: uuid::Uuid }
}

scalar_serde!(Uuid { uuid: uuid::Uuid });
scalar_driver!(Uuid { uuid }, type_mapping::to_uuid);
