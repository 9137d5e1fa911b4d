nullable_scalar! {
    /// Holds a nullable string
    String { string: std::string::String }
}

scalar_serde!(String { string: std::string::String });
scalar_driver!(String { string }, type_mapping::to_string);
