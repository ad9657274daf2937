#[cfg(test)]
mod tests {
    use crate::gateway::*;
    use chat_core::controller::ConversationController;
    use chat_core::event_bus::EventBus;
    use chat_core::ports::ChatGateway;
    use chat_core::session_store::SessionStore;
    use chat_types::config::ClientConfig;
    use chat_types::conversation::ConversationId;
    use chat_types::message::*;
    use chat_types::ChatError;
    use futures::executor::block_on;
    use std::rc::Rc;

    // ─── MemoryGateway Tests ─────────────────────────────────

    #[test]
    fn test_memory_gateway_starts_empty() {
        let gateway = MemoryGateway::new();
        assert_eq!(gateway.gateway_name(), "memory");
        assert!(block_on(gateway.list_conversations()).unwrap().is_empty());
    }

    #[test]
    fn test_memory_gateway_ask_allocates_id() {
        let gateway = MemoryGateway::with_responder(|q| format!("re: {}", q));
        let reply = block_on(gateway.ask("hello", None)).unwrap();
        assert_eq!(reply.reply, "re: hello");
        assert!(!reply.id.as_str().is_empty());

        let messages = block_on(gateway.get_messages(&reply.id)).unwrap();
        assert_eq!(messages, vec![Message::user("hello"), Message::assistant("re: hello")]);
    }

    #[test]
    fn test_memory_gateway_ask_echoes_id() {
        let gateway = MemoryGateway::new();
        let first = block_on(gateway.ask("one", None)).unwrap();
        let second = block_on(gateway.ask("two", Some(&first.id))).unwrap();
        assert_eq!(second.id, first.id);
        assert_eq!(block_on(gateway.get_messages(&first.id)).unwrap().len(), 4);
        assert_eq!(block_on(gateway.list_conversations()).unwrap().len(), 1);
    }

    #[test]
    fn test_memory_gateway_unknown_id_has_no_messages() {
        let gateway = MemoryGateway::new();
        let messages = block_on(gateway.get_messages(&ConversationId::from("missing"))).unwrap();
        assert!(messages.is_empty());
    }

    #[test]
    fn test_memory_gateway_lists_newest_first_with_titles() {
        let gateway = MemoryGateway::new();
        let empty = block_on(gateway.create_conversation()).unwrap();
        let short = block_on(gateway.ask("What is the leave policy?", None)).unwrap();
        let long = block_on(gateway.ask(
            "How many vacation days do new employees get in their first year?",
            None,
        ))
        .unwrap();

        let list = block_on(gateway.list_conversations()).unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list[0].id, long.id);
        assert_eq!(list[0].title, "How many vacation days do new ...");
        assert_eq!(list[1].id, short.id);
        assert_eq!(list[1].title, "What is the leave policy?");
        assert_eq!(list[2].id, empty);
        assert_eq!(list[2].title, "New Chat");
        assert!(list[2].timestamp.is_empty());
        assert!(!list[0].timestamp.is_empty());
    }

    #[test]
    fn test_memory_gateway_ids_are_unique() {
        let gateway = MemoryGateway::new();
        let a = block_on(gateway.create_conversation()).unwrap();
        let b = block_on(gateway.create_conversation()).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_memory_gateway_offline() {
        let gateway = MemoryGateway::new();
        gateway.set_offline(true);
        let err = block_on(gateway.ask("hi", None)).unwrap_err();
        assert!(matches!(err, ChatError::Transport(_)));
        assert!(block_on(gateway.list_conversations()).is_err());
        assert!(block_on(gateway.create_conversation()).is_err());

        gateway.set_offline(false);
        assert!(block_on(gateway.list_conversations()).unwrap().is_empty());
    }

    // ─── Gateway selection Tests ─────────────────────────────

    #[test]
    fn test_select_memory_gateway() {
        let gateway = select_gateway(&ClientConfig::new(MEMORY_API_BASE));
        assert_eq!(gateway.gateway_name(), "memory");
    }

    #[test]
    fn test_select_http_gateway() {
        let gateway = select_gateway(&ClientConfig::default());
        assert_eq!(gateway.gateway_name(), "http");
    }

    #[test]
    fn test_invalid_config_falls_back_to_memory() {
        let gateway = select_gateway(&ClientConfig::new(""));
        assert_eq!(gateway.gateway_name(), "memory");
        assert!(HttpGateway::new(ClientConfig::new("")).is_err());
    }

    // ─── Controller over MemoryGateway ───────────────────────

    #[test]
    fn test_controller_round_trip_over_memory_backend() {
        let gateway = Rc::new(MemoryGateway::with_responder(|_| "42".to_string()));
        let bus = EventBus::new();
        let sessions = SessionStore::new(gateway.clone(), bus.clone());
        let controller = ConversationController::new(gateway.clone(), sessions.clone(), bus);

        block_on(controller.send_message("What is X?"));
        let id = controller.active_id().unwrap();
        assert_eq!(sessions.conversations()[0].id, id);
        assert_eq!(sessions.conversations()[0].title, "What is X?");

        assert!(block_on(controller.start_new_conversation()));
        assert_ne!(controller.active_id(), Some(id.clone()));
        assert_eq!(sessions.conversations().len(), 2);

        block_on(controller.select_conversation(id));
        assert_eq!(
            controller.snapshot().messages,
            vec![Message::user("What is X?"), Message::assistant("42")]
        );
    }
}
