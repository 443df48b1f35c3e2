use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::Activity;

/// Why a store mutation was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    UnknownActivity,
    AlreadyRegistered,
    NotRegistered,
}

/// Process-wide activity directory. Cloning is cheap and every clone shares
/// the same underlying map, which is what axum state needs. The lock keeps
/// concurrent signups against the same activity from losing updates.
#[derive(Clone, Default)]
pub struct ActivityStore {
    inner: Arc<RwLock<BTreeMap<String, Activity>>>,
}

impl ActivityStore {
    pub fn new(activities: BTreeMap<String, Activity>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(activities)),
        }
    }

    /// Store preloaded with the fixed activity catalog.
    pub fn seeded() -> Self {
        Self::new(seed_catalog())
    }

    /// Full copy of the directory, for listings.
    pub async fn snapshot(&self) -> BTreeMap<String, Activity> {
        self.inner.read().await.clone()
    }

    /// Appends `email` to the activity's roster. Each email may appear at
    /// most once per activity.
    pub async fn add_participant(&self, activity_name: &str, email: &str) -> Result<(), StoreError> {
        let mut activities = self.inner.write().await;
        let activity = activities
            .get_mut(activity_name)
            .ok_or(StoreError::UnknownActivity)?;

        if activity.participants.iter().any(|p| p == email) {
            return Err(StoreError::AlreadyRegistered);
        }

        activity.participants.push(email.to_string());
        Ok(())
    }

    /// Removes `email` from the activity's roster, keeping the order of the
    /// remaining participants intact.
    pub async fn remove_participant(
        &self,
        activity_name: &str,
        email: &str,
    ) -> Result<(), StoreError> {
        let mut activities = self.inner.write().await;
        let activity = activities
            .get_mut(activity_name)
            .ok_or(StoreError::UnknownActivity)?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(StoreError::NotRegistered)?;

        activity.participants.remove(position);
        Ok(())
    }
}

fn activity(
    description: &str,
    schedule: &str,
    max_participants: i64,
    participants: &[&str],
) -> Activity {
    Activity {
        description: description.to_string(),
        schedule: schedule.to_string(),
        max_participants,
        participants: participants.iter().map(|p| p.to_string()).collect(),
    }
}

fn seed_catalog() -> BTreeMap<String, Activity> {
    BTreeMap::from([
        (
            "Chess Club".to_string(),
            activity(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                &["michael@mergington.edu", "daniel@mergington.edu"],
            ),
        ),
        (
            "Programming Class".to_string(),
            activity(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                &["emma@mergington.edu", "sophia@mergington.edu"],
            ),
        ),
        (
            "Gym Class".to_string(),
            activity(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                &["john@mergington.edu", "olivia@mergington.edu"],
            ),
        ),
        (
            "Art Club".to_string(),
            activity(
                "Explore drawing, painting and other visual arts",
                "Wednesdays, 3:30 PM - 5:00 PM",
                15,
                &["amelia@mergington.edu"],
            ),
        ),
        (
            "Drama Club".to_string(),
            activity(
                "Act, direct and produce the school theater shows",
                "Mondays and Thursdays, 4:00 PM - 5:30 PM",
                18,
                &[],
            ),
        ),
        (
            "Math Olympiad".to_string(),
            activity(
                "Train for regional and national math competitions",
                "Tuesdays, 3:30 PM - 4:30 PM",
                10,
                &["liam@mergington.edu"],
            ),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeded_catalog_contains_chess_club() {
        let store = ActivityStore::seeded();
        let snapshot = store.snapshot().await;
        assert!(snapshot.contains_key("Chess Club"));
    }

    #[tokio::test]
    async fn add_participant_appends_in_signup_order() {
        let store = ActivityStore::seeded();
        store
            .add_participant("Drama Club", "first@mergington.edu")
            .await
            .unwrap();
        store
            .add_participant("Drama Club", "second@mergington.edu")
            .await
            .unwrap();

        let snapshot = store.snapshot().await;
        assert_eq!(
            snapshot["Drama Club"].participants,
            vec!["first@mergington.edu", "second@mergington.edu"]
        );
    }

    #[tokio::test]
    async fn duplicate_signup_is_refused() {
        let store = ActivityStore::seeded();
        store
            .add_participant("Chess Club", "new@mergington.edu")
            .await
            .unwrap();

        let err = store
            .add_participant("Chess Club", "new@mergington.edu")
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::AlreadyRegistered);

        // Roster still lists the email exactly once.
        let snapshot = store.snapshot().await;
        let count = snapshot["Chess Club"]
            .participants
            .iter()
            .filter(|p| *p == "new@mergington.edu")
            .count();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn unknown_activity_is_refused() {
        let store = ActivityStore::seeded();
        let err = store
            .add_participant("Knitting Circle", "a@mergington.edu")
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::UnknownActivity);

        let err = store
            .remove_participant("Knitting Circle", "a@mergington.edu")
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::UnknownActivity);
    }

    #[tokio::test]
    async fn remove_participant_keeps_order_of_rest() {
        let store = ActivityStore::seeded();
        store
            .remove_participant("Gym Class", "john@mergington.edu")
            .await
            .unwrap();

        let snapshot = store.snapshot().await;
        assert_eq!(
            snapshot["Gym Class"].participants,
            vec!["olivia@mergington.edu"]
        );
    }

    #[tokio::test]
    async fn remove_unregistered_participant_is_refused() {
        let store = ActivityStore::seeded();
        let err = store
            .remove_participant("Chess Club", "not-present@mergington.edu")
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::NotRegistered);
    }

    #[tokio::test]
    async fn signup_after_removal_succeeds_again() {
        let store = ActivityStore::seeded();
        store
            .add_participant("Art Club", "re@mergington.edu")
            .await
            .unwrap();
        store
            .remove_participant("Art Club", "re@mergington.edu")
            .await
            .unwrap();
        store
            .add_participant("Art Club", "re@mergington.edu")
            .await
            .unwrap();

        let snapshot = store.snapshot().await;
        assert!(snapshot["Art Club"]
            .participants
            .contains(&"re@mergington.edu".to_string()));
    }
}
