use clap::{CommandFactory, Parser, Subcommand};
use pointrec::model::{parse_coordinate, Color, Coordinates};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pointrec", bin_name = "pointrec", version)]
#[command(
    about = "Record geocoded points, connect named nodes and export CSV / JSON",
    long_about = "Starts an interactive recording session. Commands are read one per line \
                  from stdin until `quit` or end of input; type `help` for the list."
)]
pub struct Cli {
    /// Directory holding config.json
    #[arg(long, value_name = "DIR", help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Directory receiving exports (overrides export-dir from config)
    #[arg(short, long, value_name = "DIR", help_heading = "Options")]
    pub out: Option<PathBuf>,

    /// Device position used by `locate`, as LAT,LON
    #[arg(long, value_name = "LAT,LON", allow_hyphen_values = true, help_heading = "Options")]
    pub at: Option<Coordinates>,

    /// Colour selected at start (blue or pink)
    #[arg(short, long, help_heading = "Options")]
    pub color: Option<Color>,

    /// Disable styled output
    #[arg(long, help_heading = "Options")]
    pub no_color: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, help_heading = "Options")]
    pub verbose: bool,
}

/// One line typed during a session.
#[derive(Parser, Debug)]
#[command(
    name = "pointrec",
    no_binary_name = true,
    disable_help_flag = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Points,
    Graph,
    Session,
    Export,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Points => "Point Commands:",
            CommandGroup::Graph => "Graph Commands:",
            CommandGroup::Session => "Session Commands:",
            CommandGroup::Export => "Export Commands:",
        }
    }

    /// Returns the group for a given command name
    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "add" | "delete" | "edit" | "list" => Some(CommandGroup::Points),
            "nodes" | "path" | "connections" | "suggest" => Some(CommandGroup::Graph),
            "color" | "locate" | "config" | "help" | "quit" => Some(CommandGroup::Session),
            "save" | "csv" => Some(CommandGroup::Export),
            _ => None,
        }
    }

    /// Returns all groups in display order
    pub fn all() -> &'static [CommandGroup] {
        &[
            CommandGroup::Points,
            CommandGroup::Graph,
            CommandGroup::Export,
            CommandGroup::Session,
        ]
    }
}

/// Grouped listing of the session commands.
pub fn get_grouped_help() -> String {
    let cmd = SessionLine::command();
    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    let mut output = String::new();
    output.push_str("Commands are read one per line. Points are addressed by their list number.\n");

    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| {
                !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group)
            })
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let name = sc.get_name();
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<12} {}\n", name, about));
            }
        }
    }

    output.push('\n');
    output.push_str("Type `help <command>` for the arguments of a command.\n");
    output
}

/// Help for one session command, or `None` if it does not exist.
pub fn get_command_help(name: &str) -> Option<String> {
    let mut cmd = SessionLine::command();
    cmd.build();
    cmd.find_subcommand_mut(name)
        .map(|sub| sub.render_help().to_string())
}

#[derive(Subcommand, Debug)]
pub enum SessionCommand {
    #[command(flatten)]
    Points(PointCommands),

    #[command(flatten)]
    Graph(GraphCommands),

    #[command(flatten)]
    Export(ExportCommands),

    #[command(flatten)]
    Session(SessionCommands),
}

#[derive(Subcommand, Debug)]
pub enum PointCommands {
    /// Record a point at LAT LON
    #[command(alias = "a", display_order = 1)]
    Add {
        #[arg(allow_negative_numbers = true, value_parser = parse_coordinate)]
        lat: f64,

        #[arg(allow_negative_numbers = true, value_parser = parse_coordinate)]
        lon: f64,

        /// Colour for this point only
        #[arg(short, long)]
        color: Option<Color>,
    },

    /// Delete points by list number (e.g. 1 3-5 #12)
    #[command(alias = "rm", display_order = 2)]
    Delete {
        #[arg(required = true, num_args = 1..)]
        points: Vec<String>,
    },

    /// Label a point as a node, optionally moving or recolouring it
    #[command(alias = "e", display_order = 3)]
    Edit {
        /// List number of the point (or #id)
        point: String,

        /// Node label, stored uppercased
        label: String,

        #[arg(long, allow_negative_numbers = true, value_parser = parse_coordinate)]
        lat: Option<f64>,

        #[arg(long, allow_negative_numbers = true, value_parser = parse_coordinate)]
        lon: Option<f64>,

        #[arg(short, long)]
        color: Option<Color>,
    },

    /// Show the recorded points
    #[command(alias = "ls", display_order = 4)]
    List,
}

#[derive(Subcommand, Debug)]
pub enum GraphCommands {
    /// Show the named nodes
    #[command(display_order = 10)]
    Nodes,

    /// Manage paths between nodes
    #[command(subcommand, display_order = 11)]
    Path(PathCommands),

    /// Show the paths touching a node
    #[command(alias = "conn", display_order = 12)]
    Connections { label: String },

    /// Show the next suggested node label
    #[command(display_order = 13)]
    Suggest,
}

#[derive(Subcommand, Debug)]
pub enum PathCommands {
    /// Connect two nodes; distance in meters is computed when omitted
    Add {
        from: String,
        to: String,

        #[arg(allow_negative_numbers = true)]
        distance: Option<f64>,
    },

    /// Remove the path at a list position
    #[command(alias = "rm")]
    Remove { position: usize },

    /// Replace all paths with a chain through the nodes in order
    Auto,

    /// Show the stored paths
    #[command(alias = "ls")]
    List,
}

#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Write road_path.json and edges_with_distances.json
    #[command(display_order = 20)]
    Save,

    /// Write the points table as recorded_points_<date>.csv
    #[command(display_order = 21)]
    Csv,
}

#[derive(Subcommand, Debug)]
pub enum SessionCommands {
    /// Show or set the colour of new points
    #[command(alias = "colour", display_order = 30)]
    Color { color: Option<Color> },

    /// Centre on the device position
    #[command(display_order = 31)]
    Locate {
        /// Also record the position as a point
        #[arg(short, long)]
        record: bool,
    },

    /// Get or set configuration
    #[command(display_order = 32)]
    Config {
        /// Configuration key (default-color, export-dir, label-prefix, label-start)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// List commands, or show help for one
    #[command(display_order = 33)]
    Help { command: Option<String> },

    /// End the session
    #[command(alias = "exit", alias = "q", display_order = 34)]
    Quit,
}

/// Parses one session line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> Option<Result<SessionCommand, clap::Error>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }
    Some(SessionLine::try_parse_from(trimmed.split_whitespace()).map(|l| l.command))
}
