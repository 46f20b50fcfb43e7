//! The campaign engine: a single-writer state machine over an owned
//! Campaign+Scene aggregate.
//!
//! Commands and provider-completion events are serialized through one
//! loop, so every phase transition is evaluated atomically with respect
//! to scene-status updates. Spawned provider tasks never touch state;
//! they only send events back into the loop. Keyframe responses are
//! correlated by request identity, so a superseded request's late reply
//! is dropped (last-issued-request wins).

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{broadcast, mpsc, Semaphore};
use tracing::{debug, warn, Instrument};

use reel_models::{
    Campaign, CampaignId, CampaignPhase, KeyframeSlot, RequestId, Scene, SceneId, SceneStatus,
    StyleContext,
};
use reel_providers::{
    call_with_timeout, retry_async, AudioAnalyzer, AudioSource, ClipRenderer, ImageSource,
    KeyframeRequest, KeyframeSynthesizer, RenderRequest, RetryPolicy, StyleDeriver,
};

use crate::command::Command;
use crate::config::EngineConfig;
use crate::dispatcher;
use crate::error::{EngineError, EngineResult};
use crate::events::{Event, EngineEvent, EngineSnapshot};
use crate::handle::EngineHandle;
use crate::logging::CampaignLogger;
use crate::storyboard::build_scenes;

/// External generation providers injected into the engine.
#[derive(Clone)]
pub struct Providers {
    pub audio: Arc<dyn AudioAnalyzer>,
    pub style: Arc<dyn StyleDeriver>,
    pub keyframes: Arc<dyn KeyframeSynthesizer>,
    pub renderer: Arc<dyn ClipRenderer>,
}

/// The orchestration engine for one campaign run.
pub struct CampaignEngine {
    config: EngineConfig,
    providers: Providers,
    owner_id: String,

    campaign: Option<Campaign>,
    scenes: Vec<Scene>,
    /// Latest issued synthesis request per (scene, slot); replies whose
    /// id no longer matches are stale and ignored.
    pending: HashMap<(SceneId, KeyframeSlot), RequestId>,
    /// Last synthesis failure per slot, kept until the slot is reissued.
    slot_errors: HashMap<(SceneId, KeyframeSlot), String>,
    render_progress: HashMap<SceneId, u8>,
    last_error: Option<String>,

    event_tx: mpsc::Sender<Event>,
    broadcast_tx: broadcast::Sender<EngineEvent>,
    synth_semaphore: Arc<Semaphore>,
    render_semaphore: Arc<Semaphore>,
}

impl CampaignEngine {
    /// Start the engine loop for one requesting user and return its handle.
    pub fn spawn(
        config: EngineConfig,
        providers: Providers,
        owner_id: impl Into<String>,
    ) -> EngineHandle {
        let (cmd_tx, cmd_rx) = mpsc::channel(config.command_buffer);
        let (event_tx, event_rx) = mpsc::channel(config.event_buffer);
        let (broadcast_tx, _) = broadcast::channel(config.event_buffer);

        let engine = Self {
            synth_semaphore: Arc::new(Semaphore::new(config.max_synth_parallel)),
            render_semaphore: Arc::new(Semaphore::new(config.max_render_parallel)),
            config,
            providers,
            owner_id: owner_id.into(),
            campaign: None,
            scenes: Vec::new(),
            pending: HashMap::new(),
            slot_errors: HashMap::new(),
            render_progress: HashMap::new(),
            last_error: None,
            event_tx,
            broadcast_tx: broadcast_tx.clone(),
        };

        tokio::spawn(engine.run(cmd_rx, event_rx));
        EngineHandle::new(cmd_tx, broadcast_tx)
    }

    async fn run(
        mut self,
        mut cmd_rx: mpsc::Receiver<Command>,
        mut event_rx: mpsc::Receiver<Event>,
    ) {
        loop {
            tokio::select! {
                cmd = cmd_rx.recv() => match cmd {
                    // All handles dropped: nothing can observe us anymore.
                    Some(Command::Shutdown) | None => break,
                    Some(cmd) => self.handle_command(cmd),
                },
                Some(event) = event_rx.recv() => self.handle_event(event),
            }
        }
        debug!("campaign engine loop stopped");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Submit {
                audio,
                images,
                reply,
            } => {
                reply.send(self.cmd_submit(audio, images)).ok();
            }
            Command::RegenerateKeyframe {
                scene_id,
                slot,
                reply,
            } => {
                reply.send(self.cmd_regenerate(scene_id, slot)).ok();
            }
            Command::SetKeyframe {
                scene_id,
                slot,
                url,
                reply,
            } => {
                reply.send(self.cmd_set_keyframe(scene_id, slot, url)).ok();
            }
            Command::ApproveScene { scene_id, reply } => {
                reply.send(self.cmd_approve_scene(scene_id)).ok();
            }
            Command::ApproveAll { reply } => {
                reply.send(self.cmd_approve_all()).ok();
            }
            Command::ResumeProduction { reply } => {
                reply.send(self.cmd_resume_production()).ok();
            }
            Command::Snapshot { reply } => {
                reply.send(self.snapshot()).ok();
            }
            Command::Shutdown => unreachable!("handled in run loop"),
        }
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::AnalysisFinished {
                campaign_id,
                result,
            } => self.on_analysis_finished(campaign_id, result),
            Event::KeyframeFinished {
                scene_id,
                slot,
                request_id,
                result,
            } => self.on_keyframe_finished(scene_id, slot, request_id, result),
            Event::RenderProgressed { scene_id, percent } => {
                self.on_render_progressed(scene_id, percent)
            }
            Event::RenderFinished { scene_id, result } => {
                self.on_render_finished(scene_id, result)
            }
        }
    }

    // ----- submission and analysis -----

    fn cmd_submit(
        &mut self,
        audio: AudioSource,
        images: Vec<ImageSource>,
    ) -> EngineResult<CampaignId> {
        if self.campaign.is_some() {
            return Err(EngineError::precondition(
                "a campaign has already been submitted to this engine",
            ));
        }
        if audio.is_empty() {
            return Err(EngineError::invalid_input("an audio track is required"));
        }
        if images.is_empty() || images.iter().all(|i| i.is_empty()) {
            return Err(EngineError::invalid_input(
                "at least one reference image is required",
            ));
        }

        let mut campaign = Campaign::new(self.owner_id.clone());
        campaign.set_phase(CampaignPhase::Analyzing);
        let campaign_id = campaign.id.clone();
        self.campaign = Some(campaign);
        self.publish_phase();

        let log = CampaignLogger::new(&campaign_id, "analysis");
        log.start(&format!(
            "audio '{}' and {} reference images submitted",
            audio.name,
            images.len()
        ));

        let audio_provider = Arc::clone(&self.providers.audio);
        let style_provider = Arc::clone(&self.providers.style);
        let timeout = self.config.provider_timeout;
        let events = self.event_tx.clone();
        let id = campaign_id.clone();
        tokio::spawn(
            async move {
                let (audio_result, style_result) = tokio::join!(
                    call_with_timeout("analyze_audio", timeout, audio_provider.analyze(&audio)),
                    call_with_timeout("derive_style", timeout, style_provider.derive(&images)),
                );
                let result = match (audio_result, style_result) {
                    (Ok(meta), Ok(style)) => Ok((meta, style)),
                    (Err(e), _) | (_, Err(e)) => Err(e),
                };
                events
                    .send(Event::AnalysisFinished {
                        campaign_id: id,
                        result,
                    })
                    .await
                    .ok();
            }
            .instrument(log.span()),
        );

        Ok(campaign_id)
    }

    fn on_analysis_finished(
        &mut self,
        campaign_id: CampaignId,
        result: Result<
            (reel_models::AudioMetadata, StyleContext),
            reel_providers::ProviderError,
        >,
    ) {
        let matches_current = self
            .campaign
            .as_ref()
            .map(|c| c.id == campaign_id && c.phase == CampaignPhase::Analyzing)
            .unwrap_or(false);
        if !matches_current {
            debug!(campaign_id = %campaign_id, "ignoring stale analysis result");
            return;
        }

        let log = CampaignLogger::new(&campaign_id, "analysis");
        let (meta, style) = match result {
            Ok(outcome) => outcome,
            Err(e) => {
                self.fail_campaign(EngineError::Analysis(e.to_string()));
                return;
            }
        };

        if meta.duration_seconds <= 0.0 {
            self.fail_campaign(EngineError::invariant(format!(
                "audio analysis reported non-positive duration {}",
                meta.duration_seconds
            )));
            return;
        }

        log.completion(&format!(
            "duration {:.1}s at {:.0} BPM",
            meta.duration_seconds, meta.beats_per_minute
        ));

        let scenes =
            match build_scenes(&campaign_id, &meta, &style, self.config.window_seconds) {
                Ok(scenes) => scenes,
                Err(e) => {
                    self.fail_campaign(EngineError::invariant(e.to_string()));
                    return;
                }
            };

        if let Some(campaign) = self.campaign.as_mut() {
            campaign.audio_metadata = Some(meta);
            campaign.style_context = Some(style.clone());
            campaign.set_phase(CampaignPhase::Storyboarding);
        }
        self.publish_phase();
        self.scenes = scenes;

        // Storyboarding is synchronous; move straight into image generation.
        self.set_phase(CampaignPhase::GeneratingImages);

        let requests: Vec<(SceneId, KeyframeSlot, String)> = self
            .scenes
            .iter()
            .flat_map(|scene| {
                KeyframeSlot::ALL
                    .into_iter()
                    .map(|slot| (scene.id.clone(), slot, scene.prompt(slot).to_string()))
            })
            .collect();
        CampaignLogger::new(&campaign_id, "keyframe_generation")
            .start(&format!("{} synthesis requests dispatched", requests.len()));
        for (scene_id, slot, prompt) in requests {
            self.issue_synthesis(scene_id, slot, prompt, style.clone());
        }
    }

    // ----- keyframe synthesis -----

    fn issue_synthesis(
        &mut self,
        scene_id: SceneId,
        slot: KeyframeSlot,
        prompt: String,
        style: StyleContext,
    ) -> RequestId {
        let request_id = RequestId::new();
        self.pending
            .insert((scene_id.clone(), slot), request_id.clone());
        self.slot_errors.remove(&(scene_id.clone(), slot));

        let request = KeyframeRequest {
            request_id: request_id.clone(),
            prompt,
            style,
        };
        let synthesizer = Arc::clone(&self.providers.keyframes);
        let semaphore = Arc::clone(&self.synth_semaphore);
        let timeout = self.config.provider_timeout;
        let policy = RetryPolicy::new("synthesize_keyframe")
            .with_max_retries(self.config.synth_max_retries)
            .with_base_delay(self.config.synth_base_delay)
            .with_max_delay(self.config.synth_max_delay);
        let events = self.event_tx.clone();
        let task_scene = scene_id;
        let task_request = request_id.clone();

        tokio::spawn(async move {
            let _permit = semaphore.acquire_owned().await.ok();
            let result = retry_async(&policy, || {
                let request = request.clone();
                let synthesizer = Arc::clone(&synthesizer);
                async move {
                    call_with_timeout(
                        "synthesize_keyframe",
                        timeout,
                        synthesizer.synthesize(request),
                    )
                    .await
                }
            })
            .await
            .map_err(|e| e.to_string());

            events
                .send(Event::KeyframeFinished {
                    scene_id: task_scene,
                    slot,
                    request_id: task_request,
                    result,
                })
                .await
                .ok();
        });

        request_id
    }

    fn on_keyframe_finished(
        &mut self,
        scene_id: SceneId,
        slot: KeyframeSlot,
        request_id: RequestId,
        result: Result<String, String>,
    ) {
        match self.pending.get(&(scene_id.clone(), slot)) {
            Some(current) if *current == request_id => {}
            _ => {
                debug!(scene_id = %scene_id, slot = %slot, "dropping superseded synthesis response");
                return;
            }
        }
        self.pending.remove(&(scene_id.clone(), slot));

        let updated = match self.scenes.iter_mut().find(|s| s.id == scene_id) {
            // Scenes past review never take late synthesis results; the
            // keyframes they were approved (and rendered) with are final.
            Some(scene)
                if !matches!(
                    scene.status,
                    SceneStatus::PendingImages | SceneStatus::ImagesReady
                ) =>
            {
                debug!(
                    scene_id = %scene_id,
                    slot = %slot,
                    status = %scene.status,
                    "dropping synthesis response for scene past review"
                );
                None
            }
            Some(scene) => match result {
                Ok(url) => {
                    scene.set_keyframe_url(slot, url);
                    if scene.images_ready() && scene.status == SceneStatus::PendingImages {
                        scene.status = SceneStatus::ImagesReady;
                    }
                    Some(scene.clone())
                }
                Err(message) => {
                    // The failure is scoped to this scene; siblings are
                    // unaffected and review can proceed without it.
                    if !scene.images_ready() {
                        scene.status = SceneStatus::PendingImages;
                    }
                    let err =
                        EngineError::keyframe_failed(scene_id.clone(), slot, message.clone());
                    warn!(scene_id = %scene_id, slot = %slot, "{err}");
                    self.slot_errors.insert((scene_id.clone(), slot), message);
                    self.last_error = Some(err.to_string());
                    Some(scene.clone())
                }
            },
            None => None,
        };

        if let Some(scene) = updated {
            self.publish(EngineEvent::SceneUpdated { scene });
        }

        // Review opens once every issued request has resolved terminally,
        // whether or not every scene ended up with its images.
        if self.phase() == CampaignPhase::GeneratingImages && self.pending.is_empty() {
            self.set_phase(CampaignPhase::Reviewing);
        }
    }

    fn cmd_regenerate(
        &mut self,
        scene_id: SceneId,
        slot: KeyframeSlot,
    ) -> EngineResult<RequestId> {
        let phase = self.phase();
        if !matches!(
            phase,
            CampaignPhase::GeneratingImages | CampaignPhase::Reviewing
        ) {
            return Err(EngineError::precondition(format!(
                "keyframes can only be regenerated while generating or reviewing (phase is {phase})"
            )));
        }
        let style = self
            .campaign
            .as_ref()
            .and_then(|c| c.style_context.clone())
            .ok_or_else(|| EngineError::invariant("style context missing past analyzing"))?;

        let (prompt, updated) = {
            let scene = self
                .scenes
                .iter_mut()
                .find(|s| s.id == scene_id)
                .ok_or_else(|| EngineError::UnknownScene(scene_id.clone()))?;
            // Regeneration drops any prior approval; the slot's previous
            // in-flight request (if any) is superseded below.
            scene.status = if scene.images_ready() {
                SceneStatus::ImagesReady
            } else {
                SceneStatus::PendingImages
            };
            (scene.prompt(slot).to_string(), scene.clone())
        };
        self.publish(EngineEvent::SceneUpdated { scene: updated });

        Ok(self.issue_synthesis(scene_id, slot, prompt, style))
    }

    fn cmd_set_keyframe(
        &mut self,
        scene_id: SceneId,
        slot: KeyframeSlot,
        url: String,
    ) -> EngineResult<()> {
        let phase = self.phase();
        if !matches!(
            phase,
            CampaignPhase::GeneratingImages | CampaignPhase::Reviewing
        ) {
            return Err(EngineError::precondition(format!(
                "keyframes can only be replaced while generating or reviewing (phase is {phase})"
            )));
        }

        // A manual override supersedes any in-flight synthesis for the slot.
        self.pending.remove(&(scene_id.clone(), slot));
        self.slot_errors.remove(&(scene_id.clone(), slot));

        let updated = {
            let scene = self
                .scenes
                .iter_mut()
                .find(|s| s.id == scene_id)
                .ok_or_else(|| EngineError::UnknownScene(scene_id.clone()))?;
            scene.set_keyframe_url(slot, url);
            scene.status = if scene.images_ready() {
                SceneStatus::ImagesReady
            } else {
                SceneStatus::PendingImages
            };
            scene.clone()
        };
        self.publish(EngineEvent::SceneUpdated { scene: updated });

        if self.phase() == CampaignPhase::GeneratingImages && self.pending.is_empty() {
            self.set_phase(CampaignPhase::Reviewing);
        }
        Ok(())
    }

    // ----- review gate -----

    fn cmd_approve_scene(&mut self, scene_id: SceneId) -> EngineResult<()> {
        let phase = self.phase();
        if phase != CampaignPhase::Reviewing {
            return Err(EngineError::precondition(format!(
                "scenes can only be approved during review (phase is {phase})"
            )));
        }
        // Approval is a happens-before point for production: a scene with
        // synthesis still in flight has no settled keyframes to approve.
        let in_flight = KeyframeSlot::ALL
            .into_iter()
            .any(|slot| self.pending.contains_key(&(scene_id.clone(), slot)));
        if in_flight {
            return Err(EngineError::precondition(format!(
                "scene {scene_id} has keyframe synthesis in flight"
            )));
        }

        let updated = {
            let scene = self
                .scenes
                .iter_mut()
                .find(|s| s.id == scene_id)
                .ok_or_else(|| EngineError::UnknownScene(scene_id.clone()))?;
            match scene.status {
                SceneStatus::Approved => return Ok(()),
                status if status.can_approve() => {
                    scene.status = SceneStatus::Approved;
                    scene.clone()
                }
                status => {
                    return Err(EngineError::precondition(format!(
                        "scene {scene_id} cannot be approved from status {status}"
                    )))
                }
            }
        };
        self.publish(EngineEvent::SceneUpdated { scene: updated });
        Ok(())
    }

    fn cmd_approve_all(&mut self) -> EngineResult<()> {
        let phase = self.phase();
        if phase != CampaignPhase::Reviewing {
            return Err(EngineError::precondition(format!(
                "production requires the reviewing phase (phase is {phase})"
            )));
        }
        if self.scenes.is_empty() {
            return Err(EngineError::invariant("campaign has no scenes"));
        }

        // The human-in-the-loop gate: every scene must already carry an
        // explicit approval. Nothing is dispatched otherwise.
        let unapproved = self
            .scenes
            .iter()
            .filter(|s| s.status != SceneStatus::Approved)
            .count();
        if unapproved > 0 {
            return Err(EngineError::precondition(format!(
                "{unapproved} of {} scenes are not yet approved",
                self.scenes.len()
            )));
        }

        self.set_phase(CampaignPhase::Production);
        if let Some(campaign) = &self.campaign {
            CampaignLogger::new(&campaign.id, "production")
                .start(&format!("dispatching {} render jobs", self.scenes.len()));
        }
        self.dispatch_production()
    }

    // ----- production -----

    fn cmd_resume_production(&mut self) -> EngineResult<()> {
        let phase = self.phase();
        if phase != CampaignPhase::Production {
            return Err(EngineError::precondition(format!(
                "production can only be resumed from the production phase (phase is {phase})"
            )));
        }

        // Failed scenes are being retried; clear the degraded flag until
        // the new outcome is known.
        if self.scenes.iter().any(|s| s.status == SceneStatus::Failed) {
            if let Some(campaign) = self.campaign.as_mut() {
                campaign.degraded = false;
            }
        }
        self.dispatch_production()
    }

    fn dispatch_production(&mut self) -> EngineResult<()> {
        let mut requests = Vec::new();
        for scene in &self.scenes {
            if !dispatcher::needs_dispatch(scene) {
                continue;
            }
            let (Some(start_url), Some(end_url)) =
                (scene.start_image_url.clone(), scene.end_image_url.clone())
            else {
                return Err(EngineError::invariant(format!(
                    "scene {} reached production without both keyframes",
                    scene.id
                )));
            };
            requests.push(RenderRequest {
                scene_id: scene.id.clone(),
                start_url,
                end_url,
                duration_seconds: scene.duration,
            });
        }

        for request in requests {
            let scene_id = request.scene_id.clone();
            if let Some(scene) = self.scenes.iter_mut().find(|s| s.id == scene_id) {
                scene.status = SceneStatus::ProcessingVideo;
            }
            self.render_progress.insert(scene_id, 0);
            dispatcher::spawn_render(
                Arc::clone(&self.providers.renderer),
                Arc::clone(&self.render_semaphore),
                self.config.render_timeout,
                request,
                self.event_tx.clone(),
            );
        }
        self.publish_progress();
        Ok(())
    }

    fn on_render_progressed(&mut self, scene_id: SceneId, percent: u8) {
        let rendering = self
            .scenes
            .iter()
            .any(|s| s.id == scene_id && s.status == SceneStatus::ProcessingVideo);
        if !rendering {
            return;
        }
        self.render_progress.insert(scene_id, percent.min(100));
        self.publish_progress();
    }

    fn on_render_finished(
        &mut self,
        scene_id: SceneId,
        result: Result<String, reel_providers::ProviderError>,
    ) {
        let updated = {
            let Some(scene) = self
                .scenes
                .iter_mut()
                .find(|s| s.id == scene_id && s.status == SceneStatus::ProcessingVideo)
            else {
                debug!(scene_id = %scene_id, "ignoring render result for inactive scene");
                return;
            };
            match result {
                Ok(clip_url) => {
                    scene.status = SceneStatus::Completed;
                    scene.clip_url = Some(clip_url);
                    Ok(scene.clone())
                }
                Err(e) => {
                    scene.status = SceneStatus::Failed;
                    Err((scene.clone(), e))
                }
            }
        };

        match updated {
            Ok(scene) => {
                self.render_progress.insert(scene_id, 100);
                if let Some(campaign) = &self.campaign {
                    CampaignLogger::new(&campaign.id, "production")
                        .progress(&format!("scene {} rendered", scene.sequence_order + 1));
                }
                self.publish(EngineEvent::SceneUpdated { scene });
            }
            Err((scene, e)) => {
                // Scene-scoped: completed siblings are never rolled back,
                // but the campaign can no longer report clean success.
                // Partial progress from the dead render no longer counts.
                self.render_progress.remove(&scene_id);
                let err = EngineError::render_failed(scene_id.clone(), e.to_string());
                warn!(scene_id = %scene_id, "{err}");
                self.last_error = Some(err.to_string());
                if let Some(campaign) = self.campaign.as_mut() {
                    campaign.degraded = true;
                }
                self.publish(EngineEvent::SceneUpdated { scene });
            }
        }
        self.publish_progress();

        let all_terminal = self.scenes.iter().all(|s| s.status.is_terminal());
        if !all_terminal {
            return;
        }
        let all_completed = self
            .scenes
            .iter()
            .all(|s| s.status == SceneStatus::Completed);
        if all_completed {
            if let Some(campaign) = self.campaign.as_mut() {
                campaign.degraded = false;
            }
            self.set_phase(CampaignPhase::Completed);
            if let Some(campaign) = &self.campaign {
                CampaignLogger::new(&campaign.id, "production")
                    .completion("all scenes rendered");
            }
        } else if let Some(campaign) = &self.campaign {
            // Stay in production, degraded; the operator decides whether
            // to resume the failed scenes.
            CampaignLogger::new(&campaign.id, "production")
                .warning("production finished with failed scenes");
        }
    }

    // ----- state helpers -----

    fn phase(&self) -> CampaignPhase {
        self.campaign
            .as_ref()
            .map(|c| c.phase)
            .unwrap_or(CampaignPhase::Draft)
    }

    fn degraded(&self) -> bool {
        self.campaign.as_ref().map(|c| c.degraded).unwrap_or(false)
    }

    fn set_phase(&mut self, phase: CampaignPhase) {
        if let Some(campaign) = self.campaign.as_mut() {
            campaign.set_phase(phase);
        }
        self.publish_phase();
    }

    fn fail_campaign(&mut self, err: EngineError) {
        let Some(campaign) = self.campaign.as_mut() else {
            return;
        };
        campaign.set_phase(CampaignPhase::Failed);
        let campaign_id = campaign.id.clone();
        let message = format!("campaign {campaign_id}: {err}");
        CampaignLogger::new(&campaign_id, "analysis").failure(&message);
        self.last_error = Some(message.clone());
        self.publish(EngineEvent::CampaignFailed {
            campaign_id,
            message,
        });
        self.publish_phase();
    }

    fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            campaign: self.campaign.clone(),
            scenes: self.scenes.clone(),
            phase: self.phase(),
            progress: dispatcher::production_report(
                &self.scenes,
                &self.render_progress,
                self.degraded(),
            ),
            last_error: self.last_error.clone(),
        }
    }

    fn publish(&self, event: EngineEvent) {
        self.broadcast_tx.send(event).ok();
    }

    fn publish_phase(&self) {
        if let Some(campaign) = &self.campaign {
            debug!(campaign_id = %campaign.id, phase = %campaign.phase, "phase transition");
            self.publish(EngineEvent::PhaseChanged {
                campaign_id: campaign.id.clone(),
                phase: campaign.phase,
            });
        }
    }

    fn publish_progress(&self) {
        self.publish(EngineEvent::ProductionProgress {
            report: dispatcher::production_report(
                &self.scenes,
                &self.render_progress,
                self.degraded(),
            ),
        });
    }
}
