use super::aggregate::{
    Request, RequestAttachment, RequestComment, RequestPriority, RequestStatus,
};
use crate::shared::status::Coded;
use chrono::{DateTime, NaiveDate, Utc};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn timestamp(date: NaiveDate, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    date.and_hms_opt(h, mi, s)
        .map(|t| t.and_utc())
        .unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn request(
    id: &str,
    title: &str,
    requester: &str,
    department: &str,
    priority: RequestPriority,
    status: RequestStatus,
    request_type: &str,
    created_at: NaiveDate,
    due_date: NaiveDate,
) -> Request {
    Request {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        requester: requester.to_string(),
        requester_email: String::new(),
        department: department.to_string(),
        priority: Coded::Known(priority),
        status: Coded::Known(status),
        request_type: request_type.to_string(),
        created_at,
        updated_at: None,
        due_date,
        assigned_to: String::new(),
        assigned_to_email: String::new(),
        comments: Vec::new(),
        attachments: Vec::new(),
    }
}

/// The twelve requests the console starts with, newest first
pub fn mock_requests() -> Vec<Request> {
    use RequestPriority::*;
    use RequestStatus::*;

    let mut vpn = request(
        "1", "Solicitud de Acceso VPN", "Juan Pérez", "IT", High, Pending, "access",
        date(2024, 1, 15), date(2024, 1, 20),
    );
    vpn.description = "Necesito acceso VPN para trabajar desde casa de manera segura. \
        Requiero acceso a los servidores de desarrollo y producción para poder realizar \
        mis tareas diarias."
        .to_string();
    vpn.requester_email = "juan.perez@empresa.com".to_string();
    vpn.updated_at = Some(timestamp(date(2024, 1, 15), 14, 20, 0));
    vpn.assigned_to = "María García".to_string();
    vpn.assigned_to_email = "maria.garcia@empresa.com".to_string();
    vpn.comments = vec![
        RequestComment {
            id: "1".to_string(),
            author: "María García".to_string(),
            content: "Solicitud recibida, revisando los permisos necesarios.".to_string(),
            created_at: timestamp(date(2024, 1, 15), 11, 0, 0),
        },
        RequestComment {
            id: "2".to_string(),
            author: "Juan Pérez".to_string(),
            content: "Gracias, necesito acceso urgente para el proyecto del cliente ABC."
                .to_string(),
            created_at: timestamp(date(2024, 1, 15), 14, 20, 0),
        },
    ];
    vpn.attachments = vec![RequestAttachment {
        id: "1".to_string(),
        name: "justificacion_vpn.pdf".to_string(),
        size: "245 KB".to_string(),
        uploaded_at: timestamp(date(2024, 1, 15), 10, 30, 0),
    }];

    vec![
        vpn,
        request("2", "Solicitud de Equipo Nuevo", "María García", "Marketing", Medium, Approved, "equipment", date(2024, 1, 14), date(2024, 1, 25)),
        request("3", "Solicitud de Vacaciones", "Carlos López", "Ventas", Low, Rejected, "leave", date(2024, 1, 12), date(2024, 1, 18)),
        request("4", "Solicitud de Capacitación", "Ana Martín", "RRHH", Medium, InReview, "training", date(2024, 1, 10), date(2024, 1, 22)),
        request("5", "Solicitud de Presupuesto", "Pedro Ruiz", "Finanzas", High, Pending, "budget", date(2024, 1, 8), date(2024, 1, 15)),
        request("6", "Solicitud de Mantenimiento", "Laura Sánchez", "Operaciones", Medium, Approved, "maintenance", date(2024, 1, 7), date(2024, 1, 14)),
        request("7", "Solicitud de Software", "Miguel Torres", "IT", Low, InReview, "software", date(2024, 1, 6), date(2024, 1, 13)),
        request("8", "Solicitud de Reunión", "Carmen Ruiz", "Dirección", High, Pending, "meeting", date(2024, 1, 5), date(2024, 1, 12)),
        request("9", "Solicitud de Recursos", "Antonio López", "Producción", Medium, Rejected, "resources", date(2024, 1, 4), date(2024, 1, 11)),
        request("10", "Solicitud de Formación", "Isabel García", "RRHH", Low, Approved, "training", date(2024, 1, 3), date(2024, 1, 10)),
        request("11", "Solicitud de Viaje", "Roberto Martín", "Ventas", Medium, Pending, "travel", date(2024, 1, 2), date(2024, 1, 9)),
        request("12", "Solicitud de Compra", "Elena Fernández", "Compras", High, InReview, "purchase", date(2024, 1, 1), date(2024, 1, 8)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::InMemoryStore;

    #[test]
    fn test_seed_ids_are_unique() {
        let store = InMemoryStore::new(mock_requests());
        assert!(store.is_ok());
        assert_eq!(store.unwrap().len(), 12);
    }

    #[test]
    fn test_first_request_is_complete() {
        let first = &mock_requests()[0];
        assert_eq!(first.comments.len(), 2);
        assert_eq!(first.attachments[0].name, "justificacion_vpn.pdf");
        assert_eq!(first.assigned_to, "María García");
    }
}
