//! KPI and chart models for the managerial dashboard.
//!
//! The dashboard endpoints are not wired up yet; these builders return
//! the sample figures the backend is expected to serve. Swapping them
//! for real fetches only changes where the `ChartData` comes from.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

/// One cosmetic KPI card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Kpi {
    pub title: String,
    pub value: String,
    pub change: Option<String>,
    /// Modifier class picking the card color.
    pub color: &'static str,
}

/// One dataset of a chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSeries {
    pub label: String,
    pub data: Vec<f64>,
    /// One color per value for bar/pie charts; a single stroke color
    /// for line charts.
    pub colors: Vec<String>,
}

/// Labels plus datasets, shared by all three chart kinds.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub series: Vec<ChartSeries>,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

pub fn sample_kpis() -> Vec<Kpi> {
    vec![
        Kpi {
            title: "Chamados Abertos".to_owned(),
            value: "15".to_owned(),
            change: Some("+1 hoje".to_owned()),
            color: "kpi-card--blue",
        },
        Kpi {
            title: "Chamados Concluídos (Mês)".to_owned(),
            value: "42".to_owned(),
            change: None,
            color: "kpi-card--green",
        },
        Kpi {
            title: "Tempo Médio de Resolução".to_owned(),
            value: "1.9 dias".to_owned(),
            change: None,
            color: "kpi-card--yellow",
        },
        Kpi {
            title: "SLA Cumprido".to_owned(),
            value: "98%".to_owned(),
            change: None,
            color: "kpi-card--purple",
        },
    ]
}

/// Bar chart: open tickets grouped by status.
pub fn chamados_por_status() -> ChartData {
    ChartData {
        labels: owned(&["A Iniciar", "Iniciado", "Aguardando FCA", "Concluído"]),
        series: vec![ChartSeries {
            label: "Nº de Chamados".to_owned(),
            data: vec![5.0, 8.0, 2.0, 20.0],
            colors: owned(&["#37A6DE", "#FFCE56", "#FF6384", "#4BC0C0"]),
        }],
    }
}

/// Pie chart: ticket share per module.
pub fn distribuicao_por_modulo() -> ChartData {
    ChartData {
        labels: owned(&["Sistema", "Financeiro", "Atendimento", "Administrativo"]),
        series: vec![ChartSeries {
            label: "Distribuição por Módulo".to_owned(),
            data: vec![12.0, 7.0, 10.0, 5.0],
            colors: owned(&["#613B8E", "#684192", "#37A6DE", "#0991C6"]),
        }],
    }
}

/// Line chart: tickets created vs. resolved over the last months.
pub fn evolucao_temporal() -> ChartData {
    ChartData {
        labels: owned(&["Jan", "Fev", "Mar", "Abr", "Mai"]),
        series: vec![
            ChartSeries {
                label: "Chamados Criados".to_owned(),
                data: vec![10.0, 12.0, 8.0, 15.0, 20.0],
                colors: owned(&["#613B8E"]),
            },
            ChartSeries {
                label: "Chamados Concluídos".to_owned(),
                data: vec![8.0, 10.0, 7.0, 12.0, 18.0],
                colors: owned(&["#37A6DE"]),
            },
        ],
    }
}
