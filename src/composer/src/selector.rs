use url::form_urlencoded;

/// Page location that reloads the map with another dataset. An empty name
/// asks the backend for its default dataset.
pub fn dataset_location(filename: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("filename", filename)
        .finish();

    format!("/?{query}")
}
