//! Confirm-summon use case.
//!
//! The confirmation half of the flow: take the session's selected creature,
//! work out where it lands (one square east of the caster's token, or the
//! scene center when the caster has no token), optionally draw the range
//! marker, and spawn the token. Spawning is a single atomic host call, so
//! there is no partial state to roll back if the dialog is abandoned.

use std::sync::Arc;

use summoner_domain::{
    parse_range_distance, token_placement, GridPoint, MarkerSpec, SummonError, TokenId,
    MARKER_LIFETIME,
};

use crate::ports::{HostError, NotificationPort, ScenePort};
use crate::use_cases::open_session::PreparedSummon;

/// Use case: place the selected creature on the scene.
pub struct ConfirmSummon {
    scene: Arc<dyn ScenePort>,
    notifications: Arc<dyn NotificationPort>,
}

impl ConfirmSummon {
    pub fn new(scene: Arc<dyn ScenePort>, notifications: Arc<dyn NotificationPort>) -> Self {
        Self {
            scene,
            notifications,
        }
    }

    /// Summon the selected creature. `Ok(None)` when nothing was selected
    /// (the dialog stays open); `Err` when the host failed.
    pub async fn execute(&self, prepared: &PreparedSummon) -> Result<Option<TokenId>, HostError> {
        let creature = match prepared.session.selected() {
            Ok(creature) => creature.clone(),
            Err(SummonError::NothingSelected) => {
                self.notifications.warn("No creature selected!");
                return Ok(None);
            }
            Err(err) => {
                self.notifications.warn(&err.to_string());
                return Ok(None);
            }
        };

        let geometry = self.scene.geometry().await?;
        let caster_token = self.scene.actor_token(&prepared.caster.id).await?;

        if prepared.session.place_marker() {
            self.place_marker(prepared, caster_token.as_ref().map(|t| t.center))
                .await?;
        }

        let placement = token_placement(&geometry, caster_token.map(|t| t.origin));
        let token = self.scene.spawn_token(&creature.id, placement).await?;
        tracing::info!(
            creature = %creature.name,
            token = %token,
            x = placement.x,
            y = placement.y,
            "summoned creature placed"
        );
        Ok(Some(token))
    }

    /// Draw the range marker at the caster token's center and schedule its
    /// removal. Skipped silently when the spell has no parseable range or
    /// the caster has no token to anchor it to.
    async fn place_marker(
        &self,
        prepared: &PreparedSummon,
        anchor: Option<GridPoint>,
    ) -> Result<(), HostError> {
        let Some(distance) = prepared.range.as_deref().and_then(parse_range_distance) else {
            return Ok(());
        };
        let Some(center) = anchor else {
            return Ok(());
        };

        let marker = self
            .scene
            .create_marker(MarkerSpec::circle(center, distance))
            .await?;
        tracing::debug!(marker = %marker, distance, "range marker placed");

        let scene = Arc::clone(&self.scene);
        tokio::spawn(async move {
            tokio::time::sleep(MARKER_LIFETIME).await;
            if let Err(err) = scene.remove_marker(&marker).await {
                tracing::warn!(error = %err, marker = %marker, "failed to remove range marker");
            }
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::notification_port::MockNotificationPort;
    use crate::ports::outbound::scene_port::{MockScenePort, TokenView};
    use crate::use_cases::caster::ResolvedCaster;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use summoner_domain::{
        ActorId, CasterProfile, CreatureId, CreatureRecord, FolderSummary, GridPoint,
        SceneGeometry, SelectionSession,
    };

    const GEOMETRY: SceneGeometry = SceneGeometry {
        grid_size: 100,
        width: 4000,
        height: 3000,
    };

    fn prepared(range: Option<&str>, place_marker: bool) -> PreparedSummon {
        let mut session = SelectionSession::open(
            vec![
                CreatureRecord::new("a", "Fire Elemental", 3).with_traits(["fire"]),
                CreatureRecord::new("b", "Mud Imp", 1),
            ],
            "Ezren Summons",
        )
        .expect("non-empty snapshot");
        session.set_place_marker(place_marker);
        PreparedSummon {
            caster: ResolvedCaster::new(ActorId::new("caster1"), CasterProfile::new("Ezren", false)),
            folder: FolderSummary::new("f1", "Ezren Summons", true),
            session,
            range: range.map(str::to_string),
        }
    }

    fn caster_token() -> TokenView {
        TokenView {
            id: summoner_domain::TokenId::new("tok1"),
            origin: GridPoint::new(500, 700),
            center: GridPoint::new(550, 750),
        }
    }

    #[tokio::test]
    async fn test_spawns_east_of_caster_token() {
        let mut scene = MockScenePort::new();
        scene.expect_geometry().returning(|| Ok(GEOMETRY));
        scene
            .expect_actor_token()
            .returning(|_| Ok(Some(caster_token())));
        scene
            .expect_spawn_token()
            .withf(|creature, at| {
                creature == &CreatureId::new("a") && *at == GridPoint::new(600, 700)
            })
            .times(1)
            .returning(|_, _| Ok(summoner_domain::TokenId::new("spawned")));

        let use_case = ConfirmSummon::new(Arc::new(scene), Arc::new(MockNotificationPort::new()));
        let token = use_case
            .execute(&prepared(None, false))
            .await
            .expect("host ok")
            .expect("token spawned");
        assert_eq!(token.as_str(), "spawned");
    }

    #[tokio::test]
    async fn test_without_caster_token_spawns_at_scene_center() {
        let mut scene = MockScenePort::new();
        scene.expect_geometry().returning(|| Ok(GEOMETRY));
        scene.expect_actor_token().returning(|_| Ok(None));
        scene
            .expect_spawn_token()
            .withf(|_, at| *at == GridPoint::new(2000, 1500))
            .times(1)
            .returning(|_, _| Ok(summoner_domain::TokenId::new("spawned")));

        let use_case = ConfirmSummon::new(Arc::new(scene), Arc::new(MockNotificationPort::new()));
        use_case
            .execute(&prepared(None, false))
            .await
            .expect("host ok")
            .expect("token spawned");
    }

    #[tokio::test]
    async fn test_marker_placed_at_token_center_with_parsed_range() {
        let mut scene = MockScenePort::new();
        scene.expect_geometry().returning(|| Ok(GEOMETRY));
        scene
            .expect_actor_token()
            .returning(|_| Ok(Some(caster_token())));
        scene
            .expect_create_marker()
            .withf(|spec| spec.origin == GridPoint::new(550, 750) && spec.distance == 30)
            .times(1)
            .returning(|_| Ok(summoner_domain::MarkerId::new("m1")));
        scene
            .expect_spawn_token()
            .returning(|_, _| Ok(summoner_domain::TokenId::new("spawned")));

        let use_case = ConfirmSummon::new(Arc::new(scene), Arc::new(MockNotificationPort::new()));
        use_case
            .execute(&prepared(Some("30 feet"), true))
            .await
            .expect("host ok")
            .expect("token spawned");
    }

    #[tokio::test(start_paused = true)]
    async fn test_marker_auto_removed_after_lifetime() {
        let removals = Arc::new(AtomicUsize::new(0));

        let mut scene = MockScenePort::new();
        scene.expect_geometry().returning(|| Ok(GEOMETRY));
        scene
            .expect_actor_token()
            .returning(|_| Ok(Some(caster_token())));
        scene
            .expect_create_marker()
            .returning(|_| Ok(summoner_domain::MarkerId::new("m1")));
        scene
            .expect_spawn_token()
            .returning(|_, _| Ok(summoner_domain::TokenId::new("spawned")));
        let counted = Arc::clone(&removals);
        scene
            .expect_remove_marker()
            .withf(|id| id.as_str() == "m1")
            .times(1)
            .returning(move |_| {
                counted.fetch_add(1, Ordering::SeqCst);
                Ok(())
            });

        let use_case = ConfirmSummon::new(Arc::new(scene), Arc::new(MockNotificationPort::new()));
        use_case
            .execute(&prepared(Some("30 feet"), true))
            .await
            .expect("host ok")
            .expect("token spawned");

        // Let the spawned removal task register its sleep timer at t=0
        tokio::task::yield_now().await;

        // Just short of the lifetime the marker must still be up
        tokio::time::advance(MARKER_LIFETIME - Duration::from_millis(1)).await;
        tokio::task::yield_now().await;
        assert_eq!(removals.load(Ordering::SeqCst), 0);

        // Crossing the lifetime wakes the removal task
        tokio::time::advance(Duration::from_millis(2)).await;
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }
        assert_eq!(removals.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_marker_removal_is_nonfatal() {
        let removals = Arc::new(AtomicUsize::new(0));

        let mut scene = MockScenePort::new();
        scene.expect_geometry().returning(|| Ok(GEOMETRY));
        scene
            .expect_actor_token()
            .returning(|_| Ok(Some(caster_token())));
        scene
            .expect_create_marker()
            .returning(|_| Ok(summoner_domain::MarkerId::new("m1")));
        scene
            .expect_spawn_token()
            .returning(|_, _| Ok(summoner_domain::TokenId::new("spawned")));
        let counted = Arc::clone(&removals);
        scene
            .expect_remove_marker()
            .times(1)
            .returning(move |_| {
                counted.fetch_add(1, Ordering::SeqCst);
                Err(HostError::call("marker already gone"))
            });

        let use_case = ConfirmSummon::new(Arc::new(scene), Arc::new(MockNotificationPort::new()));
        let token = use_case
            .execute(&prepared(Some("30 feet"), true))
            .await
            .expect("host ok")
            .expect("token spawned");
        assert_eq!(token.as_str(), "spawned");

        // Let the spawned removal task register its sleep timer at t=0
        tokio::task::yield_now().await;

        tokio::time::advance(MARKER_LIFETIME + Duration::from_millis(1)).await;
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }
        // Removal was attempted; the failure only logs, the summon stands
        assert_eq!(removals.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unparseable_range_skips_marker() {
        let mut scene = MockScenePort::new();
        scene.expect_geometry().returning(|| Ok(GEOMETRY));
        scene
            .expect_actor_token()
            .returning(|_| Ok(Some(caster_token())));
        scene.expect_create_marker().times(0);
        scene
            .expect_spawn_token()
            .returning(|_, _| Ok(summoner_domain::TokenId::new("spawned")));

        let use_case = ConfirmSummon::new(Arc::new(scene), Arc::new(MockNotificationPort::new()));
        use_case
            .execute(&prepared(Some("touch"), true))
            .await
            .expect("host ok")
            .expect("token spawned");
    }

    #[tokio::test]
    async fn test_empty_selection_warns_and_keeps_dialog_open() {
        let mut prepared = prepared(None, false);
        // Filter everything out so nothing is selected
        prepared.session.toggle_level(3);
        prepared.session.toggle_trait("water");
        assert!(prepared.session.result().is_empty());

        let scene = MockScenePort::new();
        let mut notifications = MockNotificationPort::new();
        notifications
            .expect_warn()
            .withf(|msg| msg.contains("No creature selected"))
            .times(1)
            .return_const(());

        let use_case = ConfirmSummon::new(Arc::new(scene), Arc::new(notifications));
        let token = use_case.execute(&prepared).await.expect("host ok");
        assert!(token.is_none());
    }
}
