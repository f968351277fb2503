// ---------------------------------------------------------------------------
// Topic classifier: guess what a CSV is about from its column names
// ---------------------------------------------------------------------------

/// One classification rule: a human-readable label plus the keywords that
/// trigger it.
pub struct TopicRule {
    pub label: &'static str,
    pub keywords: &'static [&'static str],
}

/// The fixed rule catalog. Order is significant: results are reported in
/// catalog order.
pub const TOPIC_CATALOG: &[TopicRule] = &[
    TopicRule {
        label: "📌 Información demográfica",
        keywords: &["edad", "años", "genero", "sexo", "fecha de nacimiento"],
    },
    TopicRule {
        label: "📌 Datos biométricos o de salud",
        keywords: &["peso", "altura", "masa", "presión", "temperatura"],
    },
    TopicRule {
        label: "📌 Datos financieros o laborales",
        keywords: &["salario", "sueldo", "ingreso", "puesto", "empresa", "departamento"],
    },
    TopicRule {
        label: "📌 Encuestas de satisfacción",
        keywords: &[
            "satisfacción",
            "opinión",
            "recomendaria",
            "experiencia",
            "valoración",
            "calificación",
            "encuesta",
        ],
    },
    TopicRule {
        label: "📌 Rendimiento académico o escolar",
        keywords: &[
            "calificación",
            "materia",
            "promedio",
            "nota",
            "evaluación",
            "asignatura",
        ],
    },
    TopicRule {
        label: "📌 Ventas o comercio",
        keywords: &[
            "producto", "precio", "venta", "cliente", "factura", "compra", "cantidad", "total",
        ],
    },
    TopicRule {
        label: "📌 Registro de tiempos/asistencia",
        keywords: &["fecha", "hora", "asistencia", "entrada", "salida"],
    },
];

/// Guess the probable topics of a table from its column names and file name.
///
/// A rule fires when any of its keywords equals a lower-cased column name
/// exactly, or occurs as a substring of the lower-cased file name. Column
/// names are lower-cased but never trimmed. The result holds each fired
/// label once, in catalog order; an empty result means the topic could not
/// be determined.
pub fn detect_topics(column_names: &[String], file_name: &str) -> Vec<&'static str> {
    let columns: Vec<String> = column_names.iter().map(|c| c.to_lowercase()).collect();
    let file_name = file_name.to_lowercase();

    TOPIC_CATALOG
        .iter()
        .filter(|rule| {
            rule.keywords.iter().any(|kw| {
                columns.iter().any(|col| col == kw) || file_name.contains(kw)
            })
        })
        .map(|rule| rule.label)
        .collect()
}
