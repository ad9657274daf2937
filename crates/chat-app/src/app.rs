//! Main egui application — composes the panels and forwards user intents
//! to the conversation controller.

use egui::{self, CentralPanel, SidePanel};

use chat_core::controller::ConversationController;
use chat_core::event_bus::EventBus;
use chat_core::session_store::SessionStore;
use chat_platform::gateway::select_gateway;
use chat_types::config::ClientConfig;
use chat_ui::panels::{chat, sidebar};
use chat_ui::state::{UiState, UserIntent};
use chat_ui::theme;

/// The main application state
pub struct ChatApp {
    ui_state: UiState,
    event_bus: EventBus,
    controller: ConversationController,
    first_frame: bool,
}

impl ChatApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = ClientConfig::from_build_env();
        let gateway = select_gateway(&config);
        log::info!("Using {} gateway at {}", gateway.gateway_name(), config.api_base);

        let event_bus = EventBus::new();
        let sessions = SessionStore::new(gateway.clone(), event_bus.clone());
        let controller = ConversationController::new(gateway, sessions, event_bus.clone());

        Self {
            ui_state: UiState::new(),
            event_bus,
            controller,
            first_frame: true,
        }
    }

    /// Load the conversation list once at startup
    fn load_sessions(&self, ctx: &egui::Context) {
        let sessions = self.controller.sessions().clone();
        let ctx = ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            sessions.refresh().await;
            ctx.request_repaint();
        });
    }

    /// Run a user intent against the controller (async)
    fn dispatch(&self, intent: UserIntent, ctx: &egui::Context) {
        let controller = self.controller.clone();
        let task_ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let accepted = match intent {
                UserIntent::Send(text) => controller.send_message(&text).await,
                UserIntent::Select(id) => controller.select_conversation(id).await,
                UserIntent::NewConversation => controller.start_new_conversation().await,
            };
            if !accepted {
                log::debug!("Intent ignored in phase {:?}", controller.phase());
            }
            task_ctx.request_repaint();
        });
        ctx.request_repaint();
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.load_sessions(ctx);
            self.first_frame = false;
        }

        let events = self.event_bus.drain();
        if !events.is_empty() {
            self.ui_state.process_events(events);
            ctx.request_repaint();
        }

        let conversation = self.controller.snapshot();
        if conversation.busy || conversation.loading {
            ctx.request_repaint();
        }

        let mut intents = Vec::new();

        SidePanel::left("sessions_panel")
            .exact_width(theme::SIDEBAR_WIDTH)
            .resizable(false)
            .show(ctx, |ui| {
                let conversations = self.controller.sessions().conversations();
                if let Some(intent) = sidebar::sidebar_panel(
                    ui,
                    &conversations,
                    conversation.active_id.as_ref(),
                    conversation.busy,
                ) {
                    intents.push(intent);
                }
            });

        CentralPanel::default().show(ctx, |ui| {
            if let Some(intent) = chat::chat_panel(ui, &mut self.ui_state, &conversation) {
                intents.push(intent);
            }
        });

        for intent in intents {
            self.dispatch(intent, ctx);
        }
    }
}
