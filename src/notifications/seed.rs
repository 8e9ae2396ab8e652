use crate::models::{NotificationCategory, NotificationRecord};

/// Default list shown on first run or when the persisted slot is unusable.
/// Ids 1, 2 and 4 start unread.
pub fn default_notifications() -> Vec<NotificationRecord> {
    vec![
        NotificationRecord::new(
            1,
            NotificationCategory::Appointment,
            "Appointment confirmed",
            "Your appointment with Dr. Tello on Apr 20, 10:30 AM is confirmed.",
            "10 mins ago",
            false,
        ),
        NotificationRecord::new(
            2,
            NotificationCategory::Report,
            "New lab report available",
            "Your blood test report is now ready for download.",
            "1 hour ago",
            false,
        ),
        NotificationRecord::new(
            3,
            NotificationCategory::Prescription,
            "Prescription updated",
            "Dr. Reed updated your medication dosage.",
            "Yesterday",
            true,
        ),
        NotificationRecord::new(
            4,
            NotificationCategory::System,
            "New login detected",
            "We noticed a login from a new Chrome browser on Windows.",
            "2 days ago",
            false,
        ),
        NotificationRecord::new(
            5,
            NotificationCategory::Appointment,
            "Teleconsult reminder",
            "Your telemedicine call starts in 30 minutes.",
            "3 days ago",
            true,
        ),
        NotificationRecord::new(
            6,
            NotificationCategory::Report,
            "Imaging results added",
            "Your chest X-ray report was added to Medical Records.",
            "Last week",
            true,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_has_six_records_in_id_order() {
        let ids: Vec<i64> = default_notifications().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn seed_unread_split() {
        let unread: Vec<i64> = default_notifications()
            .iter()
            .filter(|n| !n.read)
            .map(|n| n.id)
            .collect();
        assert_eq!(unread, vec![1, 2, 4]);
    }

    #[test]
    fn seed_spans_all_known_categories() {
        let categories: HashSet<_> = default_notifications()
            .into_iter()
            .map(|n| n.category)
            .collect();
        assert!(categories.contains(&NotificationCategory::Appointment));
        assert!(categories.contains(&NotificationCategory::Report));
        assert!(categories.contains(&NotificationCategory::Prescription));
        assert!(categories.contains(&NotificationCategory::System));
    }

    #[test]
    fn seed_records_are_well_formed() {
        assert!(default_notifications().iter().all(|n| n.is_well_formed()));
    }
}
