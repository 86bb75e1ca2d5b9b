//! Compile-time lexicon for the synthesizer and the classifier.
//!
//! Pure data, no behavior beyond lookup. The corpus is Colombian political
//! chatter circa the 2026 election cycle; entity tables double as the
//! classifier's gazetteer, so entries must stay verbatim — the extractor
//! matches them case-sensitively against post text.

use crate::sampler::Anchor;

/// Headlines the template expander quotes. Pre-truncated to 100 characters
/// at substitution time.
pub const HEADLINES: &[&str] = &[
    "Precandidatos de derecha se reúnen para crear coalición que complemente 'megaconsulta' de Gaviria y Uribe",
    "Partido Liberal presentó tutela contra el Nuevo Liberalismo por nombre y logo",
    "En Marcha, partido de Juan Fernando Cristo, podrá postular candidatos a Congreso y Presidencia",
    "Armando Benedetti pide excusas a la magistrada Cristina Lombana tras ataques verbales",
    "Gustavo Petro aclara alcances de la suspensión de cooperación en inteligencia con EE.UU.",
    "Juan Carlos Pinzón promete recuperar el orden y proyectar a Colombia como potencia global",
    "Héctor Olimpo Espinosa choca con Juan Guillermo Zuluaga en la Fuerza de las Regiones",
    "Gloria Arizabaleta responde por polémica de inspección al Consejo de Estado",
    "Juliana Guerrero y el escándalo por títulos académicos falsos en el Congreso",
    "Luis Carlos Reyes critica propuesta de Abelardo de la Espriella sobre legalización de dinero de narcos",
    "Gobierno oficializa a Ruth Maritza Quevedo como viceministra de Agua y Saneamiento",
    "Senado rinde homenaje a Horacio Serpa a cinco años de su muerte",
    "Unión Patriótica se retracta en caso de presunta superación de topes de campaña Petro",
    "Cancillería se reacomoda con nuevo Viceministerio de Asuntos Migratorios",
    "Proyecto de ley sanciona a candidatos que no asistan a debates presidenciales",
    "FBI y DEA seguirán cooperando con agencias de inteligencia colombianas",
    "Elecciones 2026: se configuran alianzas de derecha, centro y petrismo",
    "CNE investiga financiación irregular de campañas políticas",
    "Reforma política avanza en el Congreso con propuestas de cambio electoral",
    "Debate por narcotráfico y política en Colombia continúa",
];

// --- Entity gazetteer, in extraction order ---

pub const PERSONS: &[&str] = &[
    "Gustavo Petro",
    "Álvaro Uribe",
    "César Gaviria",
    "Juan Fernando Cristo",
    "Armando Benedetti",
    "Cristina Lombana",
    "Juan Carlos Pinzón",
    "Héctor Olimpo Espinosa",
    "Juan Guillermo Zuluaga",
    "Gloria Arizabaleta",
    "Roy Barreras",
    "Juliana Guerrero",
    "Luis Carlos Reyes",
    "Abelardo de la Espriella",
    "Ruth Maritza Quevedo",
    "Horacio Serpa",
    "Jennifer Pedraza",
    "Juan Manuel Galán",
    "Andrés Pastrana",
    "Iván Duque",
    "Claudia López",
    "Federico Gutiérrez",
    "Sergio Fajardo",
    "María Fernanda Cabal",
    "Miguel Uribe",
    "Angélica Lozano",
    "Jorge Robledo",
    "Gustavo Bolívar",
    "Katherine Miranda",
    "Carlos Fernando Galán",
];

pub const ORGANIZATIONS: &[&str] = &[
    "Pacto Histórico",
    "Centro Democrático",
    "Partido Liberal",
    "Partido Conservador",
    "Cambio Radical",
    "Nuevo Liberalismo",
    "En Marcha",
    "Fuerza de las Regiones",
    "Alianza Verde",
    "Polo Democrático",
    "Unión Patriótica",
    "CNE",
    "Corte Constitucional",
    "Consejo de Estado",
    "Corte Suprema",
    "Senado",
    "Cámara de Representantes",
    "FBI",
    "DEA",
    "Cancillería",
    "Ministerio de Justicia",
    "Fiscalía General",
];

pub const PLACES: &[&str] = &[
    "Bogotá",
    "Medellín",
    "Cali",
    "Barranquilla",
    "Cartagena",
    "Bucaramanga",
    "Cúcuta",
    "Pereira",
    "Santa Marta",
    "Manizales",
    "Ibagué",
    "Pasto",
    "Armenia",
    "Villavicencio",
    "Valledupar",
    "Montería",
    "Neiva",
    "Popayán",
    "Tunja",
    "Quibdó",
    "Riohacha",
    "Leticia",
    "Yopal",
    "Arauca",
    "Florencia",
];

pub const EVENTS: &[&str] = &[
    "elecciones 2026",
    "consulta popular",
    "reforma política",
    "acuerdo de paz",
    "plebiscito",
    "referendo",
    "debate presidencial",
    "convención",
    "coalición",
    "megaconsulta",
    "alianza electoral",
    "campaña presidencial",
    "primarias",
];

// --- Name pools for synthesized profiles ---

pub const FIRST_NAMES: &[&str] = &[
    "María", "Juan", "Carlos", "Ana", "Luis", "Diana", "Pedro", "Laura", "Jorge", "Camila",
    "Andrés", "Valentina", "Santiago", "Daniela", "Miguel", "Sofía", "David", "Isabella",
    "Fernando", "Gabriela", "Alejandro", "Natalia", "Ricardo", "Marcela", "Mauricio", "Carolina",
    "Sebastián", "Juliana", "Felipe", "Andrea", "Javier", "Paola", "César", "Claudia",
    "Hernán", "Martha", "Rodrigo", "Gloria", "Gustavo", "Patricia", "Oscar", "Beatriz",
    "Fabián", "Mónica", "Iván", "Sandra", "Alberto", "Lucía", "Álvaro", "Rosa",
];

pub const LAST_NAMES: &[&str] = &[
    "García", "Rodríguez", "Martínez", "López", "González", "Pérez", "Sánchez", "Ramírez",
    "Torres", "Flores", "Rivera", "Gómez", "Díaz", "Hernández", "Jiménez", "Moreno",
    "Muñoz", "Álvarez", "Romero", "Gutiérrez", "Vargas", "Castro", "Ortiz", "Rojas",
    "Mendoza", "Silva", "Herrera", "Medina", "Aguilar", "Vega", "Ríos", "Reyes",
    "Ruiz", "Cruz", "Morales", "Molina", "Castillo", "Suárez", "Ramos", "Campos",
];

/// Home-location labels assigned to synthesized users.
pub const HOME_CITIES: &[&str] = &[
    "Bogotá",
    "Medellín",
    "Cali",
    "Barranquilla",
    "Cartagena",
    "Bucaramanga",
    "Cúcuta",
    "Pereira",
    "Santa Marta",
    "Manizales",
    "Ibagué",
    "Pasto",
    "Villavicencio",
    "Armenia",
    "Valledupar",
    "Montería",
    "Neiva",
    "Popayán",
    "Tunja",
    "Yopal",
];

// --- Message templates ---

/// Placeholder classes: {noticia} headline, {entidad} person/organization,
/// {lugar} place, {evento} event, {accion} action, {usuario} handle.
pub const TEMPLATES: &[&str] = &[
    "🚨 URGENTE: {noticia}. ¿Qué opinan? #Colombia #Política",
    "{noticia}. Esto cambia todo para las elecciones 2026. #EleccionesColombia",
    "RT @{usuario}: {noticia} #Petrismo #Uribismo",
    "No puedo creer lo que está pasando con {entidad}. {noticia} 😱",
    "BREAKING: {noticia}. Seguimos informando. #NoticiasColombia",
    "{noticia}. Mi opinión: esto es un golpe a la democracia.",
    "¡Atención Colombia! {noticia}. ¿Estamos preparados para lo que viene?",
    "Análisis: {noticia}. Las implicaciones son enormes. 🧵👇",
    "{noticia}. El pueblo colombiano merece respuestas. #TransparenciaYa",
    "📢 {noticia}. Hora de que el Congreso actúe.",
    "{entidad} acaba de {accion}. {noticia} #PolíticaColombia",
    "Increíble: {noticia}. ¿Hasta cuándo? #Colombia2026",
    "RT: {noticia}. Esto lo cambia todo para {lugar}.",
    "{noticia}. Los colombianos estamos cansados de la corrupción. 😤",
    "🔴 EN VIVO: {noticia}. Síguenos para más información.",
    "{noticia}. ¿Ustedes qué piensan? Debate abierto 💬",
    "HILO: Todo lo que necesitas saber sobre {noticia} 🧵",
    "{noticia}. La oposición debe pronunciarse YA. #OpinionPublica",
    "Después de {evento}, ahora {noticia}. Colombia no para.",
    "{noticia} en {lugar}. Los medios no quieren que sepas esto.",
];

pub const ACTIONS: &[&str] = &[
    "anunció su candidatura",
    "se pronunció sobre",
    "criticó duramente",
    "defendió su posición",
    "cuestionó las acciones de",
    "propuso una alianza con",
    "rechazó las acusaciones de",
    "confirmó su apoyo a",
    "negó rotundamente",
    "exigió explicaciones a",
    "celebró la decisión de",
    "lamentó profundamente",
];

// --- Sentiment keyword sets (matched against lower-cased text) ---

pub const POSITIVE_WORDS: &[&str] = &[
    "excelente", "bien", "apoyo", "celebró", "gran", "esperanza", "progreso", "éxito",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "mal", "crisis", "corrupción", "escándalo", "cansados", "golpe", "crítica", "rechazo",
];

// --- Geographic anchors ---

/// Population centers the spatial sampler biases toward. Weights are
/// relative selection odds, roughly proportional to metro population.
pub const CITY_ANCHORS: &[Anchor] = &[
    Anchor { name: "Bogotá", lat: 4.7110, lon: -74.0721, weight: 30.0 },
    Anchor { name: "Medellín", lat: 6.2442, lon: -75.5812, weight: 15.0 },
    Anchor { name: "Cali", lat: 3.4516, lon: -76.5320, weight: 12.0 },
    Anchor { name: "Barranquilla", lat: 10.9685, lon: -74.7813, weight: 10.0 },
    Anchor { name: "Cartagena", lat: 10.3910, lon: -75.4794, weight: 8.0 },
    Anchor { name: "Bucaramanga", lat: 7.1193, lon: -73.1227, weight: 6.0 },
    Anchor { name: "Pereira", lat: 4.8133, lon: -75.6961, weight: 5.0 },
    Anchor { name: "Santa Marta", lat: 11.2408, lon: -74.1990, weight: 4.0 },
    Anchor { name: "Cúcuta", lat: 7.8939, lon: -72.5078, weight: 4.0 },
    Anchor { name: "Manizales", lat: 5.0670, lon: -75.5174, weight: 3.0 },
    Anchor { name: "Ibagué", lat: 4.4389, lon: -75.2322, weight: 3.0 },
];

#[cfg(test)]
mod tests {
    use super::*;
    use redsim_common::COLOMBIA_BOUNDS;

    #[test]
    fn anchors_sit_inside_the_bounding_region() {
        for anchor in CITY_ANCHORS {
            assert!(
                COLOMBIA_BOUNDS.contains(anchor.lat, anchor.lon),
                "{} is outside the region",
                anchor.name
            );
            assert!(anchor.weight > 0.0);
        }
    }

    #[test]
    fn home_cities_are_known_places() {
        for city in HOME_CITIES {
            assert!(PLACES.contains(city), "{city} missing from gazetteer");
        }
    }
}
