use hostctl_core::Project;

pub struct TableFormatter {
    name_width: usize,
    id_width: usize,
    cluster_width: usize,
}

impl TableFormatter {
    pub fn new(projects: &[Project]) -> Self {
        let width_of = |f: fn(&Project) -> &str, header: &str| {
            projects
                .iter()
                .map(|p| f(p).chars().count())
                .max()
                .unwrap_or(0)
                .clamp(header.len(), 40)
        };

        Self {
            name_width: width_of(Project::name, "Name"),
            id_width: width_of(Project::id, "ID"),
            cluster_width: projects
                .iter()
                .map(|p| p.cluster().name().chars().count())
                .max()
                .unwrap_or(0)
                .clamp("Cluster".len(), 30),
        }
    }

    pub fn print_table(&self, projects: &[Project]) {
        println!("{}", self.border('┌', '┬', '┐'));
        println!("{}", self.row("Name", "ID", "Cluster"));
        println!("{}", self.border('├', '┼', '┤'));
        for project in projects {
            println!(
                "{}",
                self.row(project.name(), project.id(), project.cluster().name())
            );
        }
        println!("{}", self.border('└', '┴', '┘'));
    }

    fn row(&self, name: &str, id: &str, cluster: &str) -> String {
        format!(
            "│ {} │ {} │ {} │",
            truncate(name, self.name_width),
            truncate(id, self.id_width),
            truncate(cluster, self.cluster_width),
        )
    }

    fn border(&self, left: char, mid: char, right: char) -> String {
        format!(
            "{left}{}{mid}{}{mid}{}{right}",
            "─".repeat(self.name_width + 2),
            "─".repeat(self.id_width + 2),
            "─".repeat(self.cluster_width + 2),
        )
    }
}

/// Truncate a string to a maximum display width, adding "..." if truncated.
///
/// Counts characters, not bytes, so multi-byte names are cut safely.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        format!("{:<width$}", s, width = max_len)
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_len)
    }
}
