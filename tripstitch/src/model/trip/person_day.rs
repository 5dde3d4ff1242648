use super::Trip;

/// the reconstructed day of one person: their trips in encounter order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonDay {
    pub person_id: String,
    pub trips: Vec<Trip>,
}
