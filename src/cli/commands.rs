//! Command dispatch: maps parsed arguments onto service calls

use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use termtree::Tree;
use tracing::{debug, instrument};

use crate::application::services::CreateItem;
use crate::cli::args::{Cli, Commands, ConfigCommands, LinkCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::{ItemTree, Node};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        None => Ok(()),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            generate(*shell, &mut cmd, "cabinet", &mut io::stdout());
            Ok(())
        }
        Some(Commands::Config { command }) => _config(command),
        Some(command) => {
            let container = build_container(cli)?;
            match command {
                Commands::Tree => _tree(&container),
                Commands::Ls { id } => _ls(&container, id),
                Commands::Cat { id } => _cat(&container, id),
                Commands::Search { query } => _search(&container, query),
                Commands::Add {
                    name,
                    kind,
                    parent,
                    content,
                } => _add(&container, name, *kind, *parent, content.clone()),
                Commands::Write { id, content } => _write(&container, id, content.as_deref()),
                Commands::Rename { id, name } => _rename(&container, id, name),
                Commands::Rm { id } => _rm(&container, id),
                Commands::Link { command } => _link(&container, command),
                Commands::Config { .. } | Commands::Completion { .. } => unreachable!(),
            }
        }
    }
}

fn build_container(cli: &Cli) -> CliResult<ServiceContainer> {
    let mut settings = Settings::load()?;
    if let Some(store) = &cli.store {
        settings.data_file = store.clone();
    }
    debug!("build_container: data_file={}", settings.data_file.display());
    Ok(ServiceContainer::new(settings)?)
}

#[instrument(skip(container))]
fn _tree(container: &ServiceContainer) -> CliResult<()> {
    let forest = container.items.list_all()?;
    for root in &forest {
        println!("{}", render_tree(root));
    }
    Ok(())
}

fn render_tree(tree: &ItemTree) -> Tree<String> {
    let mut out = Tree::new(node_label(&tree.node));
    for child in &tree.children {
        out.push(render_tree(child));
    }
    out
}

fn node_label(node: &Node) -> String {
    if node.is_folder() {
        format!("{}/", node.name)
    } else {
        node.name.clone()
    }
}

#[instrument(skip(container))]
fn _ls(container: &ServiceContainer, id: &crate::domain::NodeId) -> CliResult<()> {
    let children = container.items.list_children(id)?;
    print_node_rows(&children);
    Ok(())
}

#[instrument(skip(container))]
fn _cat(container: &ServiceContainer, id: &crate::domain::NodeId) -> CliResult<()> {
    let content = container.items.file_content(id)?;
    print!("{content}");
    if !content.ends_with('\n') && !content.is_empty() {
        println!();
    }
    Ok(())
}

#[instrument(skip(container))]
fn _search(container: &ServiceContainer, query: &str) -> CliResult<()> {
    let hits = container.items.search(query)?;
    print_node_rows(&hits);
    Ok(())
}

fn print_node_rows(nodes: &[Node]) {
    for node in nodes {
        output::info(&format!("{:<6} {}  {}", node.kind, node.id, node.name));
    }
}

#[instrument(skip(container, content))]
fn _add(
    container: &ServiceContainer,
    name: &str,
    kind: crate::cli::args::ItemKind,
    parent: Option<crate::domain::NodeId>,
    content: Option<String>,
) -> CliResult<()> {
    let node = container.items.create(CreateItem {
        name: name.to_string(),
        kind: kind.into(),
        parent_id: parent,
        content,
    })?;
    output::action("created", &format!("{} {}", node.id, node_label(&node)));
    Ok(())
}

#[instrument(skip(container, content))]
fn _write(
    container: &ServiceContainer,
    id: &crate::domain::NodeId,
    content: Option<&str>,
) -> CliResult<()> {
    let content = match content {
        Some(text) => text.to_string(),
        None => io::read_to_string(io::stdin())
            .map_err(|e| CliError::Infra(InfraError::io("read stdin", e)))?,
    };
    container.items.update_content(id, &content)?;
    output::action("wrote", id);
    Ok(())
}

#[instrument(skip(container))]
fn _rename(container: &ServiceContainer, id: &crate::domain::NodeId, name: &str) -> CliResult<()> {
    let node = container.items.rename(id, name)?;
    output::action("renamed", &format!("{} -> {}", node.id, node.name));
    Ok(())
}

#[instrument(skip(container))]
fn _rm(container: &ServiceContainer, id: &crate::domain::NodeId) -> CliResult<()> {
    container.items.delete(id)?;
    output::action("deleted", id);
    Ok(())
}

#[instrument(skip(container))]
fn _link(container: &ServiceContainer, command: &LinkCommands) -> CliResult<()> {
    match command {
        LinkCommands::List => {
            for link in container.links.list_all()? {
                output::info(&format!(
                    "{}  {}  -> {}  ({})",
                    link.code, link.short_url, link.target, link.id
                ));
            }
            Ok(())
        }
        LinkCommands::Add { url } => {
            let link = container.links.create(url)?;
            output::action("shortened", &format!("{} -> {}", link.short_url, link.target));
            Ok(())
        }
        LinkCommands::Resolve { code } => {
            let target = container.links.resolve(code)?;
            output::info(&target);
            Ok(())
        }
        LinkCommands::Rm { id } => {
            container.links.delete(id)?;
            output::action("deleted", id);
            Ok(())
        }
    }
}

fn _config(command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load()?;
            output::header("Settings");
            output::detail(&format!("data_file: {}", settings.data_file.display()));
            output::detail(&format!("public_base_url: {}", settings.public_base_url));
            Ok(())
        }
        ConfigCommands::Path => {
            match global_config_path() {
                Some(path) => output::info(&path.display()),
                None => output::info("no config directory available"),
            }
            Ok(())
        }
        ConfigCommands::Init => {
            let template = Settings::default().to_template()?;
            output::info(&template);
            Ok(())
        }
    }
}
