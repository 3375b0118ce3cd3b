use common::{ReportDocument, ReportPage};
use common::report::SummaryBox;
use yew::prelude::*;

/// A4 page styling; every report starts on a fresh sheet when printed.
const PRINT_STYLE: &str = r#"
@page { size: A4; margin: 12mm; }
.report-page { width: 210mm; min-height: 297mm; padding: 12mm; margin: 0 auto 8mm; background: #fff; color: #000; font-size: 11px; box-sizing: border-box; }
.report-page + .report-page { page-break-before: always; break-before: page; }
.report-page table { width: 100%; border-collapse: collapse; }
.report-page th, .report-page td { border: 1px solid #000; padding: 3px 4px; }
.report-page th { background: #e5e5e5; }
@media print { .report-page { margin: 0; box-shadow: none; } }
"#;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub document: ReportDocument,
}

#[function_component(ReportCardDocument)]
pub fn report_card_document(props: &Props) -> Html {
    html! {
        <div class="report-document">
            <style>{PRINT_STYLE}</style>
            { for props.document.pages.iter().map(render_page) }
        </div>
    }
}

fn render_page(page: &ReportPage) -> Html {
    html! {
        <section class="report-page shadow">
            <header class="text-center mb-3">
                <h2 class="text-xl font-bold uppercase">{&page.school_name}</h2>
                <p>{&page.school_address}</p>
                <h3 class="font-semibold mt-1">{&page.title}</h3>
            </header>

            <table class="mb-3">
                <tbody>
                    { for page.details.iter().map(|[left, right]| html! {
                        <tr>
                            <th class="text-left">{left.label}</th>
                            <td>{&left.value}</td>
                            <th class="text-left">{right.label}</th>
                            <td>{&right.value}</td>
                        </tr>
                    }) }
                </tbody>
            </table>

            <table class="mb-3">
                <thead>
                    <tr>{ for page.table_header.iter().map(|h| html! { <th>{*h}</th> }) }</tr>
                </thead>
                <tbody>
                    { for page.table_rows.iter().map(|row| html! {
                        <tr>{ for row.iter().map(|cell| html! { <td class="text-center">{cell}</td> }) }</tr>
                    }) }
                </tbody>
            </table>

            <div class="grid grid-cols-2 gap-2 mb-2">
                { summary(&page.attendance) }
                { summary(&page.performance) }
            </div>
            <div class="mb-6">
                { summary(&page.promotion) }
            </div>

            <footer class="flex justify-between mt-12">
                { for page.signatures.iter().map(|s| html! {
                    <div class="text-center w-5/12">
                        <div class="border-t border-black pt-1">{*s}</div>
                    </div>
                }) }
            </footer>
        </section>
    }
}

fn summary(section: &SummaryBox) -> Html {
    html! {
        <div class="border border-black p-2">
            <h4 class="font-bold mb-1">{section.title}</h4>
            { for section.lines.iter().map(|line| html! { <p>{line}</p> }) }
        </div>
    }
}
