//! Scripted walkthrough of the registries, written as plain text to any sink.

use std::io::Write;

use anyhow::Result;

use crate::{
    domain::{chat_registry::ChatRegistry, message::Message, user::User},
    usecases::context::AppContext,
};

const CHAT_LIST_HEADER: &str = "------------- Chat list ----------------";
const CHAT_ID_TO_DELETE: i64 = 2;
const MESSAGE_ID_TO_DELETE: i64 = 5;
const MESSAGE_ID_TO_EDIT: i64 = 1;

/// The four users of the scripted scenario.
///
/// Eva and Ken share an id on purpose: users are compared by full value, so
/// they are still two different participants.
#[derive(Debug, Clone)]
struct DemoCast {
    eva: User,
    adam: User,
    barbi: User,
    ken: User,
}

impl Default for DemoCast {
    fn default() -> Self {
        Self {
            eva: User::new(1, "Eva"),
            adam: User::new(2, "Adam"),
            barbi: User::new(3, "Barbi"),
            ken: User::new(1, "Ken"),
        }
    }
}

impl DemoCast {
    fn members(&self) -> [&User; 4] {
        [&self.eva, &self.adam, &self.barbi, &self.ken]
    }
}

/// Runs the full scenario: seeding, queries, read-marking, delete and edit.
pub fn run_demo(context: &mut AppContext, out: &mut impl Write) -> Result<()> {
    let cast = DemoCast::default();
    let recent_count = context.config.demo.recent_count;

    write_chats(out, &context.chats.borrow())?;

    context
        .messages
        .add(Message::new(cast.eva.clone(), cast.adam.clone(), "Hello"));
    context
        .messages
        .add(Message::new(cast.adam.clone(), cast.eva.clone(), "Hi"));
    write_chats(out, &context.chats.borrow())?;

    context
        .messages
        .add(Message::new(cast.barbi.clone(), cast.ken.clone(), "Hello Ken"));
    context
        .messages
        .add(Message::new(cast.ken.clone(), cast.barbi.clone(), "Hi Barbi"));
    write_chats(out, &context.chats.borrow())?;

    write_unread(out, &context.chats.borrow(), &cast.eva)?;

    writeln!(out, "\nLast messages per chat:")?;
    for line in context.chats.borrow().last_message_per_chat() {
        writeln!(out, "{line}")?;
    }

    writeln!(
        out,
        "\nLast {recent_count} messages between {} and {}:",
        cast.eva.name, cast.adam.name
    )?;
    let recent = context
        .chats
        .borrow_mut()
        .recent_messages(&cast.eva, &cast.adam, recent_count);
    for message in &recent {
        writeln!(out, "{}: {}", message.sender.name, message.text)?;
    }
    write_unread(out, &context.chats.borrow(), &cast.eva)?;

    context
        .messages
        .add(Message::new(cast.eva.clone(), cast.adam.clone(), "How are you?"));
    write_chats(out, &context.chats.borrow())?;

    let chat_deleted = context.chats.borrow_mut().delete(CHAT_ID_TO_DELETE);
    let message_deleted = context.messages.delete(MESSAGE_ID_TO_DELETE);
    tracing::info!(
        chat_id = CHAT_ID_TO_DELETE,
        chat_deleted,
        message_id = MESSAGE_ID_TO_DELETE,
        message_deleted,
        "demo deletions applied"
    );
    write_chats(out, &context.chats.borrow())?;

    let edited = context.messages.edit(
        MESSAGE_ID_TO_EDIT,
        Message::new(cast.eva.clone(), cast.adam.clone(), "new Hello"),
    );
    tracing::info!(
        message_id = MESSAGE_ID_TO_EDIT,
        edited = edited.is_some(),
        "demo edit applied"
    );
    write_chats(out, &context.chats.borrow())?;

    writeln!(out, "\nMessages stored: {}", context.messages.list().len())?;
    Ok(())
}

/// Seeds the scenario traffic and prints only the derived summaries.
pub fn run_summary(context: &mut AppContext, out: &mut impl Write) -> Result<()> {
    let cast = DemoCast::default();
    seed(context, &cast);

    let chats = context.chats.borrow();
    writeln!(out, "Last messages per chat:")?;
    for line in chats.last_message_per_chat() {
        writeln!(out, "{line}")?;
    }

    writeln!(out, "\nUnread chats per user:")?;
    for user in cast.members() {
        writeln!(
            out,
            "{} (#{}): {}",
            user.name,
            user.id,
            chats.unread_chat_count(user)
        )?;
    }

    Ok(())
}

fn seed(context: &mut AppContext, cast: &DemoCast) {
    let traffic = [
        (&cast.eva, &cast.adam, "Hello"),
        (&cast.adam, &cast.eva, "Hi"),
        (&cast.barbi, &cast.ken, "Hello Ken"),
        (&cast.ken, &cast.barbi, "Hi Barbi"),
    ];

    for (sender, receiver, text) in traffic {
        context
            .messages
            .add(Message::new(sender.clone(), receiver.clone(), text));
    }
}

fn write_chats(out: &mut impl Write, chats: &ChatRegistry) -> Result<()> {
    if chats.is_empty() {
        writeln!(out, "No chats")?;
        return Ok(());
    }

    writeln!(out, "{CHAT_LIST_HEADER}")?;
    let rendered: Vec<String> = chats.list().iter().map(ToString::to_string).collect();
    writeln!(out, "{}", rendered.join("\n\n"))?;
    Ok(())
}

fn write_unread(out: &mut impl Write, chats: &ChatRegistry, user: &User) -> Result<()> {
    writeln!(
        out,
        "\nUnread chats for {}: {}",
        user.name,
        chats.unread_chat_count(user)
    )?;
    Ok(())
}
