//! Sample issues used to populate an empty collection on first start.

use chrono::{DateTime, Duration, Utc};

use crate::entities::Issue;
use crate::enums::{IssueStatus, Priority};
use crate::ids::issue_timestamp;

const POTHOLE_PHOTO: &str =
    "https://images.pexels.com/photos/1006129/pexels-photo-1006129.jpeg?auto=compress&cs=tinysrgb&w=400";
const GARBAGE_PHOTO: &str =
    "https://images.pexels.com/photos/3735218/pexels-photo-3735218.jpeg?auto=compress&cs=tinysrgb&w=400";

struct Sample {
    id: &'static str,
    issue_type: &'static str,
    description: &'static str,
    location: &'static str,
    priority: Priority,
    status: IssueStatus,
    age: Duration,
    photo: Option<&'static str>,
}

fn samples() -> [Sample; 4] {
    [
        Sample {
            id: "1",
            issue_type: "pothole",
            description: "Large pothole causing traffic issues and potential vehicle damage",
            location: "Main Street near City Park",
            priority: Priority::High,
            status: IssueStatus::InProgress,
            age: Duration::days(1),
            photo: Some(POTHOLE_PHOTO),
        },
        Sample {
            id: "2",
            issue_type: "streetlight",
            description: "Streetlight has been flickering for several days, creating safety concerns",
            location: "5th Avenue and Oak Street intersection",
            priority: Priority::Medium,
            status: IssueStatus::Pending,
            age: Duration::days(2),
            photo: None,
        },
        Sample {
            id: "3",
            issue_type: "garbage",
            description: "Garbage bins have not been collected for over a week",
            location: "Residential area on Elm Street",
            priority: Priority::Medium,
            status: IssueStatus::Resolved,
            age: Duration::days(3),
            photo: Some(GARBAGE_PHOTO),
        },
        Sample {
            id: "4",
            issue_type: "water",
            description: "Water main break causing flooding in the area",
            location: "Downtown Commercial District",
            priority: Priority::High,
            status: IssueStatus::InProgress,
            age: Duration::hours(12),
            photo: None,
        },
    ]
}

/// The four sample issues, dated relative to `now`, in seeding order.
#[must_use]
pub fn sample_issues(now: DateTime<Utc>) -> Vec<Issue> {
    samples()
        .into_iter()
        .map(|sample| Issue {
            id: sample.id.to_string(),
            issue_type: sample.issue_type.to_string(),
            description: sample.description.to_string(),
            location: sample.location.to_string(),
            priority: sample.priority,
            status: sample.status,
            date: issue_timestamp(now - sample.age),
            photo: sample.photo.map(String::from),
        })
        .collect()
}
