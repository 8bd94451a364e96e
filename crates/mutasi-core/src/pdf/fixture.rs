//! Statement PDFs built with lopdf for tests.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

const PAGE_WIDTH: i64 = 612;
const PAGE_HEIGHT: i64 = 842;
const FONT_SIZE: i64 = 9;

/// Text run at `(x0, top)`, measured from the top-left corner of the page.
pub(crate) type Cell = (i64, i64, &'static str);

/// Build a PDF with one Helvetica text run per cell.
pub(crate) fn build_pdf(pages: &[Vec<Cell>]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids = Vec::new();
    for cells in pages {
        let mut operations = Vec::new();
        for &(x, top, text) in cells {
            // Baseline sits one font size below the top edge
            let y = PAGE_HEIGHT - top - FONT_SIZE;
            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new(
                "Tf",
                vec!["F1".into(), Object::Integer(FONT_SIZE)],
            ));
            operations.push(Operation::new(
                "Td",
                vec![Object::Integer(x), Object::Integer(y)],
            ));
            operations.push(Operation::new("Tj", vec![Object::string_literal(text)]));
            operations.push(Operation::new("ET", vec![]));
        }

        let content = Content { operations }.encode().unwrap();
        let content_id = doc.add_object(Stream::new(dictionary! {}, content));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(PAGE_WIDTH),
                Object::Integer(PAGE_HEIGHT),
            ],
        });
        kids.push(Object::from(page_id));
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => Object::Integer(count),
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut out = Vec::new();
    doc.save_to(&mut out).unwrap();
    out
}

/// A two-page BRI statement.
///
/// The first page has the header, the table heading, a wrapped
/// description and a zero-amount row. The second page starts with a
/// time-only row and ends with the footer, the summary table and a stray
/// row below it.
pub(crate) fn statement_pdf() -> Vec<u8> {
    let page1: Vec<Cell> = vec![
        (30, 60, "PT. BANK RAKYAT INDONESIA PERSERO Tbk."),
        (30, 80, "Kepada Yth. / To : BUDI SANTOSO"),
        (30, 95, "Alamat / Address : JL. MERDEKA NO. 5 BANDUNG"),
        (320, 110, "Tanggal Laporan : 03/06/25"),
        (320, 125, "Periode Transaksi : 01/05/25 - 31/05/25"),
        (320, 140, "No. Rekening : 0123-01-000456-30-7"),
        (320, 155, "Nama Produk : Britama-IDR"),
        (320, 170, "Valuta : IDR"),
        (320, 185, "Unit Kerja : KCP SUCI"),
        (320, 200, "Alamat Unit Kerja : JL. SUCI NO. 12 BANDUNG"),
        (30, 300, "Tanggal"),
        (120, 300, "Uraian Transaksi"),
        (300, 300, "Teller"),
        (380, 300, "Debet"),
        (480, 300, "Kredit"),
        (580, 300, "Saldo"),
        (30, 330, "01/05/25 10:01:00"),
        (120, 330, "SETORAN TUNAI"),
        (480, 330, "1,000,000.00"),
        (580, 330, "2,000,000.00"),
        (120, 342, "CABANG SUCI"),
        (30, 354, "02/05/25"),
        (120, 354, "BIAYA ADM"),
        (300, 354, "8888001"),
        (380, 354, "10,000.00"),
        (580, 354, "1,990,000.00"),
        (30, 366, "02/05/25"),
        (120, 366, "INFO"),
        (380, 366, "0.00"),
    ];

    let page2: Vec<Cell> = vec![
        (30, 350, "14:30"),
        (120, 350, "TARIK TUNAI"),
        (380, 350, "40,000.00"),
        (580, 350, "1,950,000.00"),
        (30, 362, "03/05/25"),
        (120, 362, "BUNGA"),
        (480, 362, "500.00"),
        (580, 362, "1,950,500.00"),
        (30, 400, "Saldo Awal"),
        (170, 400, "Total Transaksi Debet"),
        (320, 400, "Total Transaksi Kredit"),
        (470, 400, "Saldo Akhir"),
        (30, 415, "1,000,000.00"),
        (170, 415, "50,000.00"),
        (320, 415, "1,000,500.00"),
        (470, 415, "1,950,500.00"),
        (30, 430, "SATU JUTA SEMBILAN RATUS LIMA PULUH RIBU LIMA RATUS RUPIAH"),
        (30, 470, "04/05/25"),
        (120, 470, "STRAY"),
        (580, 470, "1.00"),
    ];

    build_pdf(&[page1, page2])
}
