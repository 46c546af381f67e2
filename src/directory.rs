//! Read-only directory of hospitals, medical stores and their doctors.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacilityKind {
    Hospital,
    Store,
}

impl FacilityKind {
    pub fn label(self) -> &'static str {
        match self {
            FacilityKind::Hospital => "Hospital / Clinic",
            FacilityKind::Store => "Medical Store",
        }
    }
}

impl fmt::Display for FacilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FacilityKind::Hospital => write!(f, "hospital"),
            FacilityKind::Store => write!(f, "store"),
        }
    }
}

impl FromStr for FacilityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hospital" => Ok(FacilityKind::Hospital),
            "store" => Ok(FacilityKind::Store),
            _ => Err(format!("unknown facility kind: {} (use hospital or store)", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub specialty: String,
    /// e.g. "Mon-Fri: 9 AM - 5 PM"
    pub timings: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facility {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: FacilityKind,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub image_url: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Hospitals only
    #[serde(default)]
    pub services: Vec<String>,
    /// Stores only
    pub operating_hours: Option<String>,
    /// Hospitals only
    #[serde(default)]
    pub doctors: Vec<Doctor>,
    pub appointment_booking_info: Option<String>,
    pub distance: Option<String>,
}

lazy_static! {
    static ref BUILTIN: Directory = Directory::new(builtin_facilities());
}

/// In-memory facility listing.
#[derive(Debug, Clone)]
pub struct Directory {
    facilities: Vec<Facility>,
}

impl Directory {
    pub fn new(facilities: Vec<Facility>) -> Self {
        Self { facilities }
    }

    /// The bundled demo listing
    pub fn builtin() -> &'static Directory {
        &BUILTIN
    }

    pub fn all(&self) -> &[Facility] {
        &self.facilities
    }

    pub fn by_id(&self, id: &str) -> Option<&Facility> {
        self.facilities.iter().find(|f| f.id == id)
    }

    pub fn by_kind(&self, kind: FacilityKind) -> impl Iterator<Item = &Facility> {
        self.facilities.iter().filter(move |f| f.kind == kind)
    }

    /// Every doctor listed by any facility, once each, ordered by id
    pub fn doctors(&self) -> Vec<&Doctor> {
        let mut doctors: Vec<&Doctor> = self.facilities.iter().flat_map(|f| &f.doctors).collect();
        doctors.sort_by(|a, b| a.id.cmp(&b.id));
        doctors.dedup_by(|a, b| a.id == b.id);
        doctors
    }

    pub fn doctor(&self, id: &str) -> Option<&Doctor> {
        self.facilities
            .iter()
            .flat_map(|f| &f.doctors)
            .find(|d| d.id == id)
    }

    /// Facilities a doctor practises at
    pub fn facilities_for(&self, doctor_id: &str) -> Vec<&Facility> {
        self.facilities
            .iter()
            .filter(|f| f.doctors.iter().any(|d| d.id == doctor_id))
            .collect()
    }

    /// Free-text bio for a doctor, suitable as summarizer input
    pub fn doctor_bio(&self, doctor_id: &str) -> Option<String> {
        let doctor = self.doctor(doctor_id)?;
        let mut bio = format!(
            "{} is a {}. Consultation timings: {}.",
            doctor.name, doctor.specialty, doctor.timings
        );

        for facility in self.facilities_for(doctor_id) {
            bio.push_str(&format!(
                "\nPractises at {} ({}), phone {}.",
                facility.name, facility.address, facility.phone
            ));
            if !facility.services.is_empty() {
                bio.push_str(&format!(" Services: {}.", facility.services.join(", ")));
            }
            if let Some(info) = &facility.appointment_booking_info {
                bio.push_str(&format!(" Appointments: {}", info));
            }
        }

        Some(bio)
    }
}

fn doctor(id: &str, name: &str, specialty: &str, timings: &str) -> Doctor {
    Doctor {
        id: id.to_string(),
        name: name.to_string(),
        specialty: specialty.to_string(),
        timings: timings.to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn builtin_facilities() -> Vec<Facility> {
    let doctors = [
        doctor("doc1", "Dr. Priya Sharma", "General Physician", "Mon-Fri: 9 AM - 1 PM, 3 PM - 6 PM"),
        doctor("doc2", "Dr. Rahul Verma", "Pediatrician", "Tue, Thu, Sat: 10 AM - 4 PM"),
        doctor("doc3", "Dr. Anjali Singh", "Gynecologist", "Mon, Wed, Fri: 11 AM - 5 PM"),
        doctor("doc4", "Dr. Alok Gupta", "Cardiologist", "Mon-Sat: 10 AM - 2 PM"),
        doctor("doc5", "Dr. Sunita Reddy", "Orthopedic Surgeon", "Tue, Thu: 4 PM - 7 PM"),
    ];
    let pick = |idx: &[usize]| idx.iter().map(|&i| doctors[i].clone()).collect::<Vec<_>>();

    vec![
        Facility {
            id: "1".into(),
            kind: FacilityKind::Hospital,
            name: "Community Health Center".into(),
            address: "123 Village Road, Rural District, State".into(),
            phone: "+91-123-4567890".into(),
            image_url: Some("https://picsum.photos/400/300?random=1".into()),
            latitude: Some(28.6139),
            longitude: Some(77.2090),
            services: strings(&[
                "General Checkup",
                "Emergency Care",
                "Maternity Ward",
                "Minor Procedures",
                "Vaccinations",
            ]),
            operating_hours: None,
            doctors: pick(&[0, 1]),
            appointment_booking_info: Some(
                "Call +91-123-4567890 during working hours (9AM-5PM). Walk-ins accepted for emergencies. Online booking via SwasthyaKhoj app coming soon!"
                    .into(),
            ),
            distance: Some("1.2 km away".into()),
        },
        Facility {
            id: "2".into(),
            kind: FacilityKind::Store,
            name: "Asha Medical Store".into(),
            address: "45 Market Square, Near Bus Stand, Rural Town".into(),
            phone: "+91-987-6543210".into(),
            image_url: Some("https://picsum.photos/400/300?random=2".into()),
            latitude: Some(28.6150),
            longitude: Some(77.2100),
            services: Vec::new(),
            operating_hours: Some("9 AM - 8 PM Daily. Sunday: 10 AM - 2 PM".into()),
            doctors: Vec::new(),
            appointment_booking_info: None,
            distance: Some("0.8 km away".into()),
        },
        Facility {
            id: "3".into(),
            kind: FacilityKind::Hospital,
            name: "District General Hospital".into(),
            address: "789 Highway Connect, Rural District, State".into(),
            phone: "+91-111-2223330".into(),
            image_url: Some("https://picsum.photos/400/300?random=3".into()),
            latitude: Some(28.6100),
            longitude: Some(77.2000),
            services: strings(&[
                "Specialist OPDs",
                "Advanced Surgery",
                "Pediatrics Unit",
                "Cardiology Dept.",
                "Orthopedics Wing",
                "Diagnostics Lab",
            ]),
            operating_hours: None,
            doctors: pick(&[0, 1, 2, 3, 4]),
            appointment_booking_info: Some(
                "Appointments preferred. Call +91-111-2223330 or visit our reception. Limited online slots available on our website: dghospital.example.org."
                    .into(),
            ),
            distance: Some("2.5 km away".into()),
        },
        Facility {
            id: "4".into(),
            kind: FacilityKind::Store,
            name: "Suraksha Pharmacy".into(),
            address: "Main Street, Rural Village, State".into(),
            phone: "+91-555-6667770".into(),
            image_url: Some("https://picsum.photos/400/300?random=4".into()),
            latitude: Some(28.6000),
            longitude: Some(77.1900),
            services: Vec::new(),
            operating_hours: Some("8 AM - 9 PM. Sunday Closed.".into()),
            doctors: Vec::new(),
            appointment_booking_info: None,
            distance: Some("3.1 km away".into()),
        },
        Facility {
            id: "5".into(),
            kind: FacilityKind::Hospital,
            name: "City Central Hospital".into(),
            address: "1 Inner Ring Road, Metro City, State".into(),
            phone: "+91-222-3334440".into(),
            image_url: Some("https://picsum.photos/400/300?random=5".into()),
            latitude: Some(28.6120),
            longitude: Some(77.2050),
            services: strings(&[
                "Multi-specialty Care",
                "24/7 Emergency",
                "ICU",
                "NICU",
                "Robotic Surgery",
            ]),
            operating_hours: None,
            doctors: pick(&[0, 2, 3]),
            appointment_booking_info: Some(
                "Book online at citycentral.example.com or call our helpline +91-222-3334440. Priority for emergency cases."
                    .into(),
            ),
            distance: Some("5.0 km away".into()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_five_facilities() {
        let directory = Directory::builtin();
        assert_eq!(directory.all().len(), 5);
        assert_eq!(directory.by_kind(FacilityKind::Hospital).count(), 3);
        assert_eq!(directory.by_kind(FacilityKind::Store).count(), 2);
    }

    #[test]
    fn lookup_by_id() {
        let directory = Directory::builtin();
        let facility = directory.by_id("2").unwrap();
        assert_eq!(facility.name, "Asha Medical Store");
        assert_eq!(facility.kind, FacilityKind::Store);
        assert!(facility.doctors.is_empty());
        assert!(directory.by_id("99").is_none());
    }

    #[test]
    fn doctors_are_deduplicated_and_sorted() {
        let doctors = Directory::builtin().doctors();
        let ids: Vec<&str> = doctors.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["doc1", "doc2", "doc3", "doc4", "doc5"]);
    }

    #[test]
    fn facilities_for_doctor() {
        let directory = Directory::builtin();
        let names: Vec<&str> = directory
            .facilities_for("doc1")
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "Community Health Center",
                "District General Hospital",
                "City Central Hospital"
            ]
        );
        assert_eq!(directory.facilities_for("doc5").len(), 1);
    }

    #[test]
    fn doctor_bio_mentions_specialty_and_facilities() {
        let bio = Directory::builtin().doctor_bio("doc2").unwrap();
        assert!(bio.starts_with("Dr. Rahul Verma is a Pediatrician."));
        assert!(bio.contains("Tue, Thu, Sat: 10 AM - 4 PM"));
        assert!(bio.contains("Community Health Center"));
        assert!(bio.contains("District General Hospital"));
        assert!(!bio.contains("City Central Hospital"));
        assert!(Directory::builtin().doctor_bio("doc9").is_none());
    }

    #[test]
    fn booking_info_is_kept_in_full() {
        let info = Directory::builtin()
            .by_id("1")
            .and_then(|f| f.appointment_booking_info.as_deref())
            .unwrap();
        assert!(info.starts_with("Call +91-123-4567890 during working hours"));
        assert!(info.ends_with("Online booking via SwasthyaKhoj app coming soon!"));
    }

    #[test]
    fn kind_parses_case_insensitively() {
        assert_eq!("Hospital".parse::<FacilityKind>(), Ok(FacilityKind::Hospital));
        assert_eq!("store".parse::<FacilityKind>(), Ok(FacilityKind::Store));
        assert!("clinic".parse::<FacilityKind>().is_err());
    }

    #[test]
    fn facility_serializes_with_type_tag() {
        let json = serde_json::to_value(Directory::builtin().by_id("4").unwrap()).unwrap();
        assert_eq!(json["type"], "store");
        assert_eq!(json["operatingHours"], "8 AM - 9 PM. Sunday Closed.");
    }
}
