use super::*;

#[test]
fn sample_kpis_fill_four_cards() {
    let kpis = sample_kpis();
    assert_eq!(kpis.len(), 4);
    assert!(kpis.iter().all(|k| !k.title.is_empty() && !k.value.is_empty()));
}

#[test]
fn chart_series_lengths_match_labels() {
    for chart in [
        chamados_por_status(),
        distribuicao_por_modulo(),
        evolucao_temporal(),
    ] {
        for series in &chart.series {
            assert_eq!(series.data.len(), chart.labels.len(), "{}", series.label);
        }
    }
}

#[test]
fn bar_and_pie_have_one_color_per_value() {
    for chart in [chamados_por_status(), distribuicao_por_modulo()] {
        let series = &chart.series[0];
        assert_eq!(series.colors.len(), series.data.len());
    }
}

#[test]
fn line_chart_carries_two_series() {
    let chart = evolucao_temporal();
    assert_eq!(chart.series.len(), 2);
    assert!(chart.series.iter().all(|s| s.colors.len() == 1));
}
