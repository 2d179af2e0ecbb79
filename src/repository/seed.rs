//! Demo data the in-memory store boots with.

use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::broadcast::MessageTemplate;
use crate::domain::chat::{Author, Chat, ChatMessage, ChatStatus};
use crate::domain::client::{CallStatus, ClientRecord, InterestStatus, RegistrationStatus};
use crate::domain::settings::{CallState, KnowledgeDocument, Location, Priority};
use crate::domain::types::{
    AgentName, CallStateName, ClientId, ClientName, DocumentName, DocumentPath, EntryId, HexColor,
    LocationName, PriorityName, SanitizedText, TemplateName, TypeConstraintError, UserEmail,
    UserName,
};
use crate::domain::user::{User, UserRole};

type SeedResult<T> = Result<T, TypeConstraintError>;

/// Keeps the rows that parse, logging the ones that don't.
fn collect_valid<T>(kind: &str, rows: impl IntoIterator<Item = SeedResult<T>>) -> Vec<T> {
    rows.into_iter()
        .filter_map(|row| match row {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("Skipping invalid {kind} seed row: {e}");
                None
            }
        })
        .collect()
}

fn date(raw: &str) -> SeedResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| TypeConstraintError::InvalidValue(format!("{raw}: {e}")))
}

fn date_time(raw: &str) -> SeedResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M")
        .map_err(|e| TypeConstraintError::InvalidValue(format!("{raw}: {e}")))
}

struct ClientRow {
    id: &'static str,
    name: &'static str,
    phone: &'static str,
    location: &'static str,
    agent: &'static str,
    priority: Option<&'static str>,
    contacted: bool,
    interest: Option<InterestStatus>,
    follow_up: bool,
    registered: bool,
    calls: u32,
    last_call: Option<&'static str>,
    notes: &'static str,
    registered_on: &'static str,
    last_interaction: &'static str,
}

const CLIENT_ROWS: [ClientRow; 15] = [
    ClientRow {
        id: "1",
        name: "Jose David Pelaez",
        phone: "312 456 7890",
        location: "Desconocido",
        agent: "Victor Guzmán",
        priority: None,
        contacted: false,
        interest: None,
        follow_up: false,
        registered: false,
        calls: 0,
        last_call: None,
        notes: "",
        registered_on: "2025-12-16",
        last_interaction: "2026-01-14 17:57",
    },
    ClientRow {
        id: "2",
        name: "Nicolás Pedraza",
        phone: "315 789 1234",
        location: "Desconocido",
        agent: "Victor Guzmán",
        priority: None,
        contacted: false,
        interest: None,
        follow_up: false,
        registered: false,
        calls: 0,
        last_call: None,
        notes: "",
        registered_on: "2025-12-01",
        last_interaction: "2026-01-14 17:42",
    },
    ClientRow {
        id: "3",
        name: "Aldair",
        phone: "320 111 2222",
        location: "Bucaramanga",
        agent: "Victor Guzmán",
        priority: Some("Media"),
        contacted: true,
        interest: Some(InterestStatus::NotInterested),
        follow_up: true,
        registered: false,
        calls: 2,
        last_call: Some("2025-11-12"),
        notes: "",
        registered_on: "2025-12-01",
        last_interaction: "2026-01-14 16:32",
    },
    ClientRow {
        id: "4",
        name: "Oscar Araque",
        phone: "318 333 4444",
        location: "Desconocido",
        agent: "Diana Margarita",
        priority: None,
        contacted: false,
        interest: None,
        follow_up: false,
        registered: false,
        calls: 0,
        last_call: None,
        notes: "",
        registered_on: "2025-11-27",
        last_interaction: "2026-01-14 15:35",
    },
    ClientRow {
        id: "5",
        name: "Sebastian",
        phone: "317 555 6666",
        location: "Desconocido",
        agent: "Juan Sebastian",
        priority: None,
        contacted: false,
        interest: None,
        follow_up: false,
        registered: false,
        calls: 0,
        last_call: None,
        notes: "",
        registered_on: "2025-11-27",
        last_interaction: "2026-01-14 15:06",
    },
    ClientRow {
        id: "6",
        name: "ARKADE",
        phone: "310 777 8888",
        location: "Desconocido",
        agent: "Victor Guzmán",
        priority: Some("Media"),
        contacted: true,
        interest: Some(InterestStatus::Interested),
        follow_up: false,
        registered: false,
        calls: 1,
        last_call: Some("2025-11-20"),
        notes: "",
        registered_on: "2025-11-20",
        last_interaction: "2026-01-14 14:57",
    },
    ClientRow {
        id: "7",
        name: "Felipe Durango",
        phone: "319 999 0000",
        location: "Desconocido",
        agent: "Mafe",
        priority: Some("Baja"),
        contacted: true,
        interest: Some(InterestStatus::NoAnswer),
        follow_up: false,
        registered: false,
        calls: 1,
        last_call: Some("2025-12-10"),
        notes: "",
        registered_on: "2025-11-19",
        last_interaction: "2026-01-14 14:16",
    },
    ClientRow {
        id: "8",
        name: "Que",
        phone: "321 123 4567",
        location: "Desconocido",
        agent: "John Comercial",
        priority: None,
        contacted: false,
        interest: None,
        follow_up: false,
        registered: false,
        calls: 0,
        last_call: None,
        notes: "",
        registered_on: "2025-11-12",
        last_interaction: "2026-01-14 14:05",
    },
    ClientRow {
        id: "9",
        name: "Usuario desconocido",
        phone: "322 234 5678",
        location: "Desconocido",
        agent: "Victor Guzmán",
        priority: None,
        contacted: true,
        interest: Some(InterestStatus::NoAnswer),
        follow_up: false,
        registered: false,
        calls: 1,
        last_call: Some("2025-09-22"),
        notes: "",
        registered_on: "2025-09-22",
        last_interaction: "2026-01-14 13:38",
    },
    ClientRow {
        id: "10",
        name: "Oscar Ortega",
        phone: "323 345 6789",
        location: "Bogotá",
        agent: "Victor Guzmán",
        priority: Some("Alta"),
        contacted: false,
        interest: Some(InterestStatus::Interested),
        follow_up: true,
        registered: true,
        calls: 0,
        last_call: None,
        notes: "Sin comentarios",
        registered_on: "2025-12-16",
        last_interaction: "2026-01-13 12:30",
    },
    ClientRow {
        id: "11",
        name: "Kenthomakentheking",
        phone: "324 456 7890",
        location: "Medellín",
        agent: "Victor Guzmán",
        priority: Some("Alta"),
        contacted: true,
        interest: Some(InterestStatus::Interested),
        follow_up: true,
        registered: true,
        calls: 3,
        last_call: Some("2025-12-15"),
        notes: "Sin comentarios",
        registered_on: "2025-12-01",
        last_interaction: "2026-01-12 11:20",
    },
    ClientRow {
        id: "12",
        name: "MARISOL",
        phone: "325 567 8901",
        location: "Cali",
        agent: "Victor Guzmán",
        priority: Some("Media"),
        contacted: true,
        interest: Some(InterestStatus::Interested),
        follow_up: true,
        registered: false,
        calls: 2,
        last_call: Some("2025-12-14"),
        notes: "Sin comentarios",
        registered_on: "2025-12-01",
        last_interaction: "2026-01-11 10:15",
    },
    ClientRow {
        id: "13",
        name: "Colmedica",
        phone: "326 678 9012",
        location: "Cartagena",
        agent: "Victor Guzmán",
        priority: Some("Alta"),
        contacted: false,
        interest: Some(InterestStatus::Interested),
        follow_up: true,
        registered: true,
        calls: 0,
        last_call: None,
        notes: "Sin comentarios",
        registered_on: "2025-12-01",
        last_interaction: "2026-01-10 09:00",
    },
    ClientRow {
        id: "14",
        name: "Juan Diego Colmenares",
        phone: "327 789 0123",
        location: "Barranquilla",
        agent: "Diana Margarita",
        priority: Some("Baja"),
        contacted: true,
        interest: Some(InterestStatus::NoAnswer),
        follow_up: true,
        registered: false,
        calls: 1,
        last_call: Some("2025-12-13"),
        notes: "Sin comentarios",
        registered_on: "2025-11-27",
        last_interaction: "2026-01-09 08:45",
    },
    ClientRow {
        id: "15",
        name: "Yuly Tavera",
        phone: "328 890 1234",
        location: "Pereira",
        agent: "Mafe",
        priority: Some("Baja"),
        contacted: false,
        interest: Some(InterestStatus::NotInterested),
        follow_up: true,
        registered: true,
        calls: 0,
        last_call: None,
        notes: "Sin comentarios",
        registered_on: "2025-11-19",
        last_interaction: "2026-01-08 07:30",
    },
];

impl ClientRow {
    fn build(&self) -> SeedResult<ClientRecord> {
        Ok(ClientRecord {
            id: ClientId::new(self.id)?,
            name: ClientName::new(self.name)?,
            phone: self.phone.to_string(),
            location: LocationName::new(self.location)?,
            assigned_agent: AgentName::new(self.agent)?,
            priority_tag: self.priority.map(PriorityName::new).transpose()?,
            call_status: if self.contacted {
                CallStatus::Contacted
            } else {
                CallStatus::NotContacted
            },
            interest_status: self.interest,
            follow_up: self.follow_up,
            registration: if self.registered {
                RegistrationStatus::Registered
            } else {
                RegistrationStatus::Unregistered
            },
            call_count: self.calls,
            last_call_on: self.last_call.map(date).transpose()?,
            notes: self.notes.to_string(),
            registered_on: date(self.registered_on)?,
            last_interaction_at: date_time(self.last_interaction)?,
        })
    }
}

/// The demo roster, most recent interaction first.
pub fn clients() -> Vec<ClientRecord> {
    collect_valid("client", CLIENT_ROWS.iter().map(ClientRow::build))
}

pub fn priorities() -> Vec<Priority> {
    let rows = [
        ("1", "Alta", "#ef4444", "Contactar en las próximas 24 horas"),
        ("2", "Media", "#f59e0b", "Contactar durante la semana"),
        ("3", "Baja", "#10b981", "Sin urgencia"),
    ];
    collect_valid(
        "priority",
        rows.into_iter().map(|(id, name, color, description)| {
            Ok(Priority {
                id: EntryId::new(id)?,
                name: PriorityName::new(name)?,
                color: HexColor::new(color)?,
                description: SanitizedText::new(description),
            })
        }),
    )
}

pub fn call_states() -> Vec<CallState> {
    let rows = [
        ("1", "Contactado", "#10b981", "Se habló con el cliente"),
        ("2", "No contactado", "#ef4444", "Aún no se ha llamado"),
        ("3", "No contestó", "#f59e0b", "Se llamó sin respuesta"),
    ];
    collect_valid(
        "call state",
        rows.into_iter().map(|(id, name, color, description)| {
            Ok(CallState {
                id: EntryId::new(id)?,
                name: CallStateName::new(name)?,
                color: HexColor::new(color)?,
                description: SanitizedText::new(description),
            })
        }),
    )
}

pub fn locations() -> Vec<Location> {
    let rows = [
        ("1", "Bucaramanga", "Zona Franca Santander", "607 555 0101"),
        ("2", "Bogotá", "Calle 26 # 69-76", "601 555 0102"),
        ("3", "Medellín", "Carrera 43A # 1-50", "604 555 0103"),
        ("4", "Cali", "Avenida 6N # 23-45", "602 555 0104"),
        ("5", "Cartagena", "Bocagrande Carrera 2", "605 555 0105"),
        ("6", "Barranquilla", "Calle 72 # 54-35", "605 555 0106"),
        ("7", "Pereira", "Avenida Circunvalar # 8-12", "606 555 0107"),
    ];
    collect_valid(
        "location",
        rows.into_iter().map(|(id, name, address, phone)| {
            Ok(Location {
                id: EntryId::new(id)?,
                name: LocationName::new(name)?,
                address: address.to_string(),
                phone: phone.to_string(),
                active: true,
            })
        }),
    )
}

pub fn documents() -> Vec<KnowledgeDocument> {
    let rows = [
        (
            "1",
            "Programas de formación",
            "Oferta académica y duración de cada ruta",
            "/docs/programas.pdf",
            "2025-11-03",
        ),
        (
            "2",
            "Planes de pago",
            "Opciones de financiación y pago directo",
            "/docs/planes-de-pago.pdf",
            "2025-11-10",
        ),
    ];
    collect_valid(
        "document",
        rows.into_iter().map(|(id, name, description, path, created)| {
            Ok(KnowledgeDocument {
                id: EntryId::new(id)?,
                name: DocumentName::new(name)?,
                description: SanitizedText::new(description),
                pdf_path: DocumentPath::new(path)?,
                active: true,
                created_on: date(created)?,
            })
        }),
    )
}

pub fn users() -> Vec<User> {
    use UserRole::{Administrator, Commercial};
    let rows = [
        ("1", "DiegoT", "diego@orbit.com", Administrator, true),
        ("2", "Jhon Jairo Marin Diaz", "jhon@orbit.com", Administrator, false),
        ("3", "Juan Sebastian adm", "juans@orbit.com", Administrator, true),
        ("4", "Davisson adm", "davisson@orbit.com", Administrator, false),
        ("5", "Valentina adm", "valentina@orbit.com", Administrator, false),
        ("6", "Davisson", "davisson.c@orbit.com", Commercial, false),
        ("7", "Valentina", "valentina.c@orbit.com", Commercial, false),
        ("8", "Juan Sebastian", "juans.c@orbit.com", Commercial, true),
        ("9", "Otras Sedes", "sedes@orbit.com", Commercial, true),
        ("10", "Mafe", "mafe@orbit.com", Commercial, true),
    ];
    collect_valid(
        "user",
        rows.into_iter().map(|(id, name, email, role, active)| {
            Ok(User {
                id: EntryId::new(id)?,
                name: UserName::new(name)?,
                email: UserEmail::new(email)?,
                role,
                active,
            })
        }),
    )
}

pub fn templates() -> Vec<MessageTemplate> {
    let rows = [
        ("1", "virtual", "🚀 Trabajas de día... pero sabes que tu futuro puede ir más lejos. En Campuslands...", false),
        ("2", "bienvenida", "Hola, mi nombre es Orbit", false),
        ("3", "seguimiento_full_info", "Hola 👋 Hace poco intenté llamarte por tu interés en Campuslands, pero no logramos...", false),
        ("4", "seguimiento_no_contestado", "Hola 👋, intenté comunicarme contigo, pero no fue posible. Como vi tu interés en...", true),
        ("5", "reactivacion_septiembre3", "Hola, soy Iza de Campuslands. Hace un tiempo mostraste interés en formarte como...", true),
        ("6", "campaa_sept2", "🚀 Hoy es el momento de dar el paso hacia tu futuro profesional. En *Campusland...", true),
        ("7", "campaa_sept", "🚀 Hoy es el momento de dar el paso hacia tu futuro profesional. En *Campusland...", true),
        ("8", "mensaje_prueba_plantilla", "⚡ *Solo 5 cupos disponibles* ⚡ El *grupo de la mañana* arranca su *período de pr...", true),
        ("9", "prueba_platilla", "Hola mundo prueba dos botones", true),
        ("10", "reactivacion_septiembre2", "⚡ *Solo 5 cupos disponibles* ⚡ El *grupo de la mañana* arranca su *periodo de pr...", false),
        ("11", "reactivacion_septiembre", "⚡ *Solo 5 cupos disponibles* ⚡ El *grupo de la mañana* arranca su *periodo de pr...", false),
        ("12", "reactivacion_agosto", "Hola 👋, te saluda Iza desde Campuslands. Hace un tiempo mostraste tu interés...", false),
        ("13", "reactivacion_julio2025", "👩‍💻Hola! Espero que estés muy bien Hace un tiempo nos escribiste con interés...", false),
        ("14", "msj_acercamiento2", "¿Te gustaría aprender a programar y trabajar en tecnología en menos de 1 año?...", false),
        ("15", "example_cv_campus", "¡Hola! Te saludamos desde Campuslands. Hemos recibido tu hoja de vida pa...", false),
        ("16", "welcome_cajasan", "¡Hola! Te saluda Iza Márquez de Campuslands. Sabemos que la tecnología y l...", false),
    ];
    collect_valid(
        "template",
        rows.into_iter().map(|(id, name, content, has_button)| {
            Ok(MessageTemplate {
                id: EntryId::new(id)?,
                name: TemplateName::new(name)?,
                content: content.to_string(),
                has_button,
            })
        }),
    )
}

fn message(id: &str, author: Author, content: &str, sent_at: &str) -> SeedResult<ChatMessage> {
    Ok(ChatMessage {
        id: EntryId::new(id)?,
        author,
        content: content.to_string(),
        sent_at: sent_at.to_string(),
    })
}

fn chat(
    id: &str,
    client_name: &str,
    status: ChatStatus,
    contact_status: CallStatus,
    last_message_time: &str,
    unread: u32,
    messages: Vec<SeedResult<ChatMessage>>,
) -> SeedResult<Chat> {
    Ok(Chat {
        id: EntryId::new(id)?,
        client_name: client_name.to_string(),
        status,
        contact_status,
        last_message_time: last_message_time.to_string(),
        unread,
        messages: messages.into_iter().collect::<SeedResult<_>>()?,
    })
}

pub fn chats() -> Vec<Chat> {
    use Author::{Assistant, Client};
    use CallStatus::{Contacted, NotContacted};

    collect_valid(
        "chat",
        [
            chat(
                "1",
                "♡~Pati~♡",
                ChatStatus::Unknown,
                NotContacted,
                "17:45",
                5,
                vec![
                    message(
                        "1",
                        Assistant,
                        "¡Excelente! Me alegra que hayas completado tus datos. Un asesor se comunicará contigo lo antes posible para finalizar tu inscripción.",
                        "05/01/2026, 13:02",
                    ),
                    message("2", Client, "Cual es el precio de los cursos", "05/01/2026, 13:02"),
                    message(
                        "3",
                        Assistant,
                        "El costo se adapta al programa que elijas y a tu plan de pago. ¿Te gustaría que te contacten pronto?",
                        "05/01/2026, 13:03",
                    ),
                    message("4", Client, "Sí", "05/01/2026, 13:03"),
                    message(
                        "5",
                        Assistant,
                        "Ya le he notificado a nuestro equipo para que se pongan en contacto contigo lo antes posible.",
                        "05/01/2026, 13:03",
                    ),
                ],
            ),
            chat(
                "2",
                "Jose David Pelaez",
                ChatStatus::Draft,
                NotContacted,
                "16:57",
                0,
                vec![
                    message(
                        "1",
                        Client,
                        "Hola, me interesa saber más sobre los programas",
                        "05/01/2026, 16:55",
                    ),
                    message(
                        "2",
                        Assistant,
                        "¡Hola! Gracias por tu interés. Tenemos programas de desarrollo de software y tecnología. ¿Te gustaría que te cuente más?",
                        "05/01/2026, 16:57",
                    ),
                ],
            ),
            chat(
                "3",
                "Nicolás Pedraza",
                ChatStatus::Draft,
                NotContacted,
                "16:42",
                4,
                vec![message(
                    "1",
                    Client,
                    "Buenos días, quisiera información",
                    "05/01/2026, 16:40",
                )],
            ),
            chat(
                "4",
                "Aldair",
                ChatStatus::Draft,
                Contacted,
                "15:32",
                58,
                vec![message(
                    "1",
                    Client,
                    "Hola, ya me contactaron pero tengo más preguntas",
                    "05/01/2026, 15:30",
                )],
            ),
            chat("5", "Oscar Araque", ChatStatus::Draft, NotContacted, "14:35", 2, vec![]),
            chat("6", "Sebastian", ChatStatus::Draft, NotContacted, "14:06", 2, vec![]),
            chat("7", "ARKADE", ChatStatus::Draft, Contacted, "13:57", 4, vec![]),
        ],
    )
}
