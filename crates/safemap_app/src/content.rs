pub const HEADER_TITLE: &str = "U-District Community Safety Map";
pub const HEADER_SUBTITLE: &str = "Report and track safety concerns around UW campus";

pub const EMERGENCY_NOTE: &str = "For emergencies, call 911. For immediate campus security needs, contact UW Police at (206) 685-8973.";

pub const SAFETY_TIPS: [&str; 5] = [
    "Travel in groups when possible, especially at night",
    "Stay in well-lit areas and avoid shortcuts through alleys",
    "Keep valuables secure and bikes properly locked",
    "Use UW's SafeCampus escort service after dark",
    "Report emergencies to 911, non-emergencies to campus security",
];
