nullable_scalar! {
    /// Holds a nullable `bool`
    #[derive(Copy)]
    Bool { bool: bool }
}

scalar_serde!(Bool { bool: bool });
scalar_driver!(Bool { bool }, type_mapping::to_bool);
