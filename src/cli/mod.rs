pub mod dashboard;
pub mod docs;
pub mod export;
pub mod init;
pub mod invoices;
pub mod open;
pub mod revenues;
pub mod status;
pub mod tasks;
pub mod vocab;

use clap::{Args, Parser, Subcommand};

use crate::filter::{DocumentFilter, InvoiceFilter, RevenueFilter, TaskFilter};

#[derive(Parser)]
#[command(
    name = "bureau",
    about = "Personal and small-office record manager: invoices, revenues, admin documents, tasks."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set up bureau: choose a data directory and initialize the database.
    Init {
        /// Path for bureau data (default: ~/Documents/bureau)
        #[arg(long = "data-dir")]
        data_dir: Option<String>,
    },
    /// Manage invoices (payables).
    Invoice {
        #[command(subcommand)]
        command: InvoiceCommands,
    },
    /// Manage revenues (receivables).
    Revenue {
        #[command(subcommand)]
        command: RevenueCommands,
    },
    /// Manage administrative documents.
    Doc {
        #[command(subcommand)]
        command: DocCommands,
    },
    /// Manage to-do tasks.
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
    /// Manage the choice lists behind record fields (creditors, categories, ...).
    Vocab {
        #[command(subcommand)]
        command: VocabCommands,
    },
    /// KPI cards and breakdown tables over the filtered snapshot.
    Dashboard(DashboardArgs),
    /// Export a filtered record list to CSV.
    Export {
        #[command(subcommand)]
        command: ExportCommands,
    },
    /// Open the document attached to a record.
    Open {
        /// Record kind: invoice, revenue, doc, task
        kind: String,
        /// Record ID
        id: i64,
    },
    /// Show current database and record counts.
    Status,
}

// ---------------------------------------------------------------------------
// Filter flags — one Args struct per record kind, mapped 1:1 onto the
// engine's filter configurations. Empty flag = no constraint.
// ---------------------------------------------------------------------------

#[derive(Args, Debug, Default)]
pub struct InvoiceFilterArgs {
    /// Substring filter on creditor (case-sensitive)
    #[arg(long, default_value = "")]
    pub creditor: String,
    /// Substring filter on concern
    #[arg(long, default_value = "")]
    pub concern: String,
    /// Substring filter on category
    #[arg(long, default_value = "")]
    pub category: String,
    /// YYYY-MM prefix filter on the due date
    #[arg(long, default_value = "")]
    pub month: String,
    /// Substring filter on status
    #[arg(long, default_value = "")]
    pub status: String,
}

impl InvoiceFilterArgs {
    pub fn to_filter(&self) -> InvoiceFilter {
        InvoiceFilter {
            creditor: self.creditor.clone(),
            concern: self.concern.clone(),
            category: self.category.clone(),
            month: self.month.clone(),
            status: self.status.clone(),
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct RevenueFilterArgs {
    /// Substring filter on source
    #[arg(long, default_value = "")]
    pub source: String,
    /// Substring filter on revenue type
    #[arg(long = "type", default_value = "")]
    pub revenue_type: String,
    /// YYYY-MM prefix filter on the receipt date
    #[arg(long, default_value = "")]
    pub month: String,
}

impl RevenueFilterArgs {
    pub fn to_filter(&self) -> RevenueFilter {
        RevenueFilter {
            source: self.source.clone(),
            revenue_type: self.revenue_type.clone(),
            month: self.month.clone(),
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct DocFilterArgs {
    /// Substring filter on concern
    #[arg(long, default_value = "")]
    pub concern: String,
    /// Substring filter on category
    #[arg(long, default_value = "")]
    pub category: String,
    /// Substring filter on status
    #[arg(long, default_value = "")]
    pub status: String,
}

impl DocFilterArgs {
    pub fn to_filter(&self) -> DocumentFilter {
        DocumentFilter {
            concern: self.concern.clone(),
            category: self.category.clone(),
            status: self.status.clone(),
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct TaskFilterArgs {
    /// Substring filter on category
    #[arg(long, default_value = "")]
    pub category: String,
    /// Substring filter on priority
    #[arg(long, default_value = "")]
    pub priority: String,
    /// Substring filter on status
    #[arg(long, default_value = "")]
    pub status: String,
}

impl TaskFilterArgs {
    pub fn to_filter(&self) -> TaskFilter {
        TaskFilter {
            category: self.category.clone(),
            priority: self.priority.clone(),
            status: self.status.clone(),
        }
    }
}

/// The dashboard filters both monetary kinds at once; `--month` applies to
/// invoice due dates and revenue receipt dates alike.
#[derive(Args, Debug)]
pub struct DashboardArgs {
    #[arg(long, default_value = "")]
    pub creditor: String,
    #[arg(long, default_value = "")]
    pub concern: String,
    #[arg(long, default_value = "")]
    pub category: String,
    #[arg(long, default_value = "")]
    pub month: String,
    #[arg(long, default_value = "")]
    pub status: String,
    #[arg(long, default_value = "")]
    pub source: String,
    #[arg(long = "type", default_value = "")]
    pub revenue_type: String,
    /// Invoice breakdown dimension: creditor, category, month, status
    #[arg(long, default_value = "month")]
    pub by: String,
    /// Revenue breakdown dimension: source, type, month
    #[arg(long = "revenues-by", default_value = "month")]
    pub revenues_by: String,
}

impl DashboardArgs {
    pub fn invoice_filter(&self) -> InvoiceFilter {
        InvoiceFilter {
            creditor: self.creditor.clone(),
            concern: self.concern.clone(),
            category: self.category.clone(),
            month: self.month.clone(),
            status: self.status.clone(),
        }
    }

    pub fn revenue_filter(&self) -> RevenueFilter {
        RevenueFilter {
            source: self.source.clone(),
            revenue_type: self.revenue_type.clone(),
            month: self.month.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Per-kind subcommands
// ---------------------------------------------------------------------------

#[derive(Subcommand)]
pub enum InvoiceCommands {
    /// Add an invoice.
    Add {
        /// Creditor name
        creditor: String,
        /// Concern the invoice belongs to
        concern: String,
        /// Expense category
        category: String,
        /// Amount in CHF
        amount: f64,
        /// Due date: YYYY-MM-DD
        #[arg(long = "due")]
        due_date: String,
        /// Path to the invoice document
        #[arg(long)]
        path: Option<String>,
        /// Free-text description
        #[arg(long)]
        description: Option<String>,
        /// Initial status
        #[arg(long, default_value = crate::models::STATUS_OPEN)]
        status: String,
    },
    /// List invoices, filtered.
    List {
        #[command(flatten)]
        filter: InvoiceFilterArgs,
    },
    /// Mark an invoice as paid today.
    Pay {
        /// Invoice ID
        id: i64,
    },
    /// Delete an invoice.
    Delete {
        /// Invoice ID
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum RevenueCommands {
    /// Add a revenue.
    Add {
        /// Payer / source name
        source: String,
        /// Revenue type
        #[arg(long = "type")]
        revenue_type: String,
        /// Amount in CHF
        amount: f64,
        /// Receipt date: YYYY-MM-DD
        #[arg(long = "date")]
        receipt_date: String,
        /// Free-text description
        #[arg(long)]
        description: Option<String>,
        /// Path to the receipt document
        #[arg(long)]
        path: Option<String>,
    },
    /// List revenues, filtered.
    List {
        #[command(flatten)]
        filter: RevenueFilterArgs,
    },
    /// Delete a revenue.
    Delete {
        /// Revenue ID
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum DocCommands {
    /// Add an administrative document.
    Add {
        /// Concern the document belongs to
        concern: String,
        /// Document category
        category: String,
        /// Path to the document file
        path: String,
        /// Free-text description
        #[arg(long, default_value = "")]
        description: String,
        /// Document status
        #[arg(long)]
        status: String,
    },
    /// List documents, filtered.
    List {
        #[command(flatten)]
        filter: DocFilterArgs,
    },
    /// Delete a document.
    Delete {
        /// Document ID
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Add a to-do task.
    Add {
        /// Task title
        title: String,
        /// Free-text description
        #[arg(long, default_value = "")]
        description: String,
        /// Task status
        #[arg(long, default_value = "Pending")]
        status: String,
        /// Task priority
        #[arg(long, default_value = "Normal")]
        priority: String,
        /// Due date: YYYY-MM-DD
        #[arg(long = "due", default_value = "")]
        due_date: String,
        /// Task category
        #[arg(long, default_value = "")]
        category: String,
        /// Path to an attached document
        #[arg(long)]
        attachments: Option<String>,
    },
    /// List tasks, filtered.
    List {
        #[command(flatten)]
        filter: TaskFilterArgs,
    },
    /// Update fields of an existing task.
    Update {
        /// Task ID
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        priority: Option<String>,
        #[arg(long = "due")]
        due_date: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        attachments: Option<String>,
    },
    /// Delete a task.
    Delete {
        /// Task ID
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum VocabCommands {
    /// Add a term to a vocabulary.
    Add {
        /// Vocabulary key (see `bureau vocab list`)
        vocabulary: String,
        /// Term to add
        name: String,
    },
    /// List a vocabulary's terms, or all vocabulary keys.
    List {
        /// Vocabulary key; omit to list the available vocabularies
        vocabulary: Option<String>,
    },
    /// Delete a term by ID.
    Delete {
        /// Vocabulary key
        vocabulary: String,
        /// Term ID (shown in `bureau vocab list <vocabulary>`)
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum ExportCommands {
    /// Export filtered invoices.
    Invoices {
        #[command(flatten)]
        filter: InvoiceFilterArgs,
        /// Output file path
        #[arg(long)]
        output: Option<String>,
    },
    /// Export filtered revenues.
    Revenues {
        #[command(flatten)]
        filter: RevenueFilterArgs,
        /// Output file path
        #[arg(long)]
        output: Option<String>,
    },
    /// Export filtered admin documents.
    Docs {
        #[command(flatten)]
        filter: DocFilterArgs,
        /// Output file path
        #[arg(long)]
        output: Option<String>,
    },
    /// Export filtered tasks.
    Tasks {
        #[command(flatten)]
        filter: TaskFilterArgs,
        /// Output file path
        #[arg(long)]
        output: Option<String>,
    },
}
