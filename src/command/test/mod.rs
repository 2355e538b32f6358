use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;
use serenity::all::{
    ApplicationId, CommandInteraction, CommandOptionType, CreateCommand, GuildId, InteractionId,
    InteractionType, UserId,
};
use test_utils::serenity::{
    create_test_autocomplete_interaction, create_test_command_interaction, integer_option,
    string_option, TEST_INTERACTION_ID, TEST_INTERACTION_TOKEN,
};

use crate::{
    command::{
        dispatch::{
            DispatchOutcome, InteractionDispatcher, COMMAND_NOT_FOUND_MESSAGE,
            INTERNAL_ERROR_MESSAGE,
        },
        registry::CommandRegistry,
        session::{Reply, ReplyTarget, Session},
        Command, CommandHandler, CommandMetadata, CommandOptionSpec,
    },
    error::command::{CommandError, DispatchError, PublishError},
};


/// ID returned by `MockSession::current_user_id`.
pub const BOT_USER_ID: u64 = 900000000000000009;

/// How `MockSession::respond` behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RespondMode {
    /// Every response is accepted.
    Accept,
    /// The first response is accepted and later ones rejected, like Discord once
    /// an interaction has been answered.
    Once,
    /// Every response is rejected.
    Reject,
}

/// A call recorded by `MockSession`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCall {
    Respond {
        target: ReplyTarget,
        reply: Reply,
    },
    Edit {
        target: ReplyTarget,
        content: String,
    },
    CurrentUser,
    Overwrite {
        application_id: ApplicationId,
        scope: Option<GuildId>,
        names: Vec<String>,
    },
}

/// Recording stand-in for Discord.
///
/// Every call is recorded, including rejected ones, so tests can assert on the
/// exact sequence of attempts.
pub struct MockSession {
    pub respond_mode: RespondMode,
    pub fail_edit: bool,
    pub fail_current_user: bool,
    pub fail_overwrite: bool,
    calls: Mutex<Vec<SessionCall>>,
}

impl MockSession {
    pub fn new() -> Self {
        Self {
            respond_mode: RespondMode::Accept,
            fail_edit: false,
            fail_current_user: false,
            fail_overwrite: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_respond_mode(mut self, mode: RespondMode) -> Self {
        self.respond_mode = mode;
        self
    }

    pub fn failing_edit(mut self) -> Self {
        self.fail_edit = true;
        self
    }

    pub fn calls(&self) -> Vec<SessionCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Content of every attempted initial response, in order.
    pub fn responses(&self) -> Vec<Reply> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                SessionCall::Respond { reply, .. } => Some(reply),
                _ => None,
            })
            .collect()
    }

    /// Content of every attempted edit, in order.
    pub fn edits(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                SessionCall::Edit { content, .. } => Some(content),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: SessionCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl Session for MockSession {
    async fn respond(&self, target: &ReplyTarget, reply: Reply) -> Result<(), serenity::Error> {
        let previous = self.responses().len();
        self.record(SessionCall::Respond {
            target: target.clone(),
            reply,
        });

        match self.respond_mode {
            RespondMode::Accept => Ok(()),
            RespondMode::Once if previous == 0 => Ok(()),
            RespondMode::Once => Err(serenity::Error::Other("interaction already acknowledged")),
            RespondMode::Reject => Err(serenity::Error::Other("respond rejected")),
        }
    }

    async fn edit_response(
        &self,
        target: &ReplyTarget,
        content: &str,
    ) -> Result<(), serenity::Error> {
        self.record(SessionCall::Edit {
            target: target.clone(),
            content: content.to_string(),
        });

        if self.fail_edit {
            return Err(serenity::Error::Other("edit rejected"));
        }
        Ok(())
    }

    async fn current_user_id(&self) -> Result<UserId, serenity::Error> {
        self.record(SessionCall::CurrentUser);

        if self.fail_current_user {
            return Err(serenity::Error::Other("unauthorized"));
        }
        Ok(UserId::new(BOT_USER_ID))
    }

    async fn overwrite_commands(
        &self,
        application_id: ApplicationId,
        scope: Option<GuildId>,
        commands: Vec<CreateCommand>,
    ) -> Result<(), serenity::Error> {
        let names = commands
            .iter()
            .filter_map(|command| serde_json::to_value(command).ok())
            .filter_map(|value| value["name"].as_str().map(str::to_string))
            .collect();

        self.record(SessionCall::Overwrite {
            application_id,
            scope,
            names,
        });

        if self.fail_overwrite {
            return Err(serenity::Error::Other("bulk overwrite rejected"));
        }
        Ok(())
    }
}

/// What a `StubHandler` does when executed.
#[derive(Debug, Clone, Copy)]
pub enum StubBehaviour {
    /// Responds with the given content and succeeds.
    Respond(&'static str),
    /// Fails without responding.
    Fail(&'static str),
    /// Responds with the given content, then fails.
    RespondThenFail(&'static str, &'static str),
}

/// Handler with scripted behaviour that counts its executions.
pub struct StubHandler {
    behaviour: StubBehaviour,
    executions: Arc<AtomicUsize>,
}

impl StubHandler {
    pub fn new(behaviour: StubBehaviour) -> (Self, Arc<AtomicUsize>) {
        let executions = Arc::new(AtomicUsize::new(0));
        (
            Self {
                behaviour,
                executions: executions.clone(),
            },
            executions,
        )
    }
}

#[async_trait]
impl CommandHandler for StubHandler {
    async fn execute(
        &self,
        session: &dyn Session,
        interaction: &CommandInteraction,
    ) -> Result<(), CommandError> {
        self.executions.fetch_add(1, Ordering::SeqCst);
        let target = ReplyTarget::from(interaction);

        match self.behaviour {
            StubBehaviour::Respond(content) => {
                session.respond(&target, Reply::new(content)).await?;
                Ok(())
            }
            StubBehaviour::Fail(reason) => Err(serenity::Error::Other(reason).into()),
            StubBehaviour::RespondThenFail(content, reason) => {
                session.respond(&target, Reply::new(content)).await?;
                Err(serenity::Error::Other(reason).into())
            }
        }
    }
}

/// Builds a command named `name` around a `StubHandler`.
pub fn stub_command(name: &str, behaviour: StubBehaviour) -> (Command, Arc<AtomicUsize>) {
    let (handler, executions) = StubHandler::new(behaviour);
    let command = Command::new(
        CommandMetadata::new(name, format!("Test command {}", name)),
        handler,
    );
    (command, executions)
}

/// Reply target every test interaction resolves to.
pub fn test_target() -> ReplyTarget {
    ReplyTarget {
        id: InteractionId::new(TEST_INTERACTION_ID),
        token: TEST_INTERACTION_TOKEN.to_string(),
    }
}

/// Registry containing the given commands.
pub fn registry_with(commands: Vec<Command>) -> Arc<CommandRegistry> {
    let registry = CommandRegistry::new();
    for command in commands {
        registry.register(command);
    }
    Arc::new(registry)
}
