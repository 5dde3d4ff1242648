/// one mode-homogeneous segment of a trip, either walked or served by a
/// single vehicle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Leg {
    /// seconds since simulation midnight, truncated to whole seconds
    pub leg_start: i64,
    pub leg_end: i64,
    /// meters, summed over the matched traversals
    pub distance: f64,
    /// mode of the first matched traversal; empty while the leg is open or
    /// when matching found nothing
    pub leg_mode: String,
    /// id of the serving vehicle (the body vehicle for walk legs)
    pub vehicle: String,
    pub fuel_cost: f64,
    pub fare: f64,
    pub toll: f64,
    /// first and last traversed link, absent when no links are known
    pub orig_link: Option<i64>,
    pub dest_link: Option<i64>,
    /// traversed link ids, duplicates removed, first-seen order
    pub links: Vec<i64>,
    /// 1-based traversal numbers of the serving vehicle, ascending
    pub path_nums: Vec<usize>,
}

impl Leg {
    /// seconds spent on this leg
    pub fn duration(&self) -> i64 {
        self.leg_end - self.leg_start
    }
}
