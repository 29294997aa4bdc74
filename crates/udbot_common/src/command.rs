//! Command registration metadata for the hosting framework.

/// Name and help line a framework binding registers the handler under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub name: &'static str,
    pub help: &'static str,
}

/// The `!ud` command.
pub const UD_COMMAND: CommandSpec = CommandSpec {
    name: "ud",
    help: "Lookup urbandictionary.com. Syntax: !ud <term> [index]",
};
