//! WebSocket upgrade + message loop. Each connection owns a fresh session
//! (announced right after connect, discarded on disconnect) unless the client
//! attaches to another one.
//! Every client message gets exactly one JSON reply.

use std::sync::Arc;
use axum::{
  extract::{
    ws::{Message, WebSocket},
    State, WebSocketUpgrade,
  },
  response::IntoResponse,
};
use tracing::{info, error, instrument, debug};

use crate::error::{Error, Result};
use crate::protocol::{questionnaire_out, result_out, session_out, ClientWsMessage, ServerWsMessage};
use crate::state::AppState;

#[instrument(level = "info", skip(state))]
pub async fn ws_upgrade(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> impl IntoResponse {
  info!(target: "kolb_backend", "WebSocket upgrade requested");
  ws.on_upgrade(move |socket| handle_ws(socket, state))
}

async fn send_json(socket: &mut WebSocket, msg: &ServerWsMessage) -> bool {
  let out = serde_json::to_string(msg).unwrap_or_else(|e| {
    serde_json::json!({ "type": "error", "message": format!("Serialization error: {}", e) }).to_string()
  });
  match socket.send(Message::Text(out)).await {
    Ok(()) => true,
    Err(e) => {
      error!(target: "kolb_backend", error = %e, "WS send error");
      false
    }
  }
}

#[instrument(level = "info", skip(socket, state))]
async fn handle_ws(mut socket: WebSocket, state: Arc<AppState>) {
  info!(target: "kolb_backend", "WebSocket connected");

  let (mut session_id, hello) = match state.create_session().await {
    Ok(s) => (Some(s.id.clone()), ServerWsMessage::Session { session: session_out(&s) }),
    Err(e) => (None, ServerWsMessage::Error { message: e.to_string() }),
  };
  let own_id = session_id.clone();
  if !send_json(&mut socket, &hello).await {
    if let Some(id) = own_id {
      let _ = state.remove_session(&id).await;
    }
    return;
  }

  while let Some(Ok(msg)) = socket.recv().await {
    match msg {
      Message::Text(txt) => {
        // Parse, dispatch, serialize response.
        let reply_msg = match serde_json::from_str::<ClientWsMessage>(&txt) {
          Ok(incoming) => {
            debug!(target: "kolb_backend", "WS received: {:?}", &incoming);
            handle_client_ws(incoming, &state, &mut session_id)
              .await
              .unwrap_or_else(|e| ServerWsMessage::Error { message: e.to_string() })
          }
          Err(e) => ServerWsMessage::Error { message: format!("Invalid JSON: {}", e) },
        };

        if !send_json(&mut socket, &reply_msg).await {
          break;
        }
      }
      Message::Ping(payload) => { let _ = socket.send(Message::Pong(payload)).await; }
      Message::Close(_) => break,
      _ => {}
    }
  }
  // The socket's own session ends with the connection.
  if let Some(id) = own_id {
    let _ = state.remove_session(&id).await;
  }
  info!(target: "kolb_backend", session = ?session_id, "WebSocket disconnected");
}

/// Session bound to this socket; absent when creation was refused at connect.
fn current(session_id: &Option<String>) -> Result<String> {
  session_id.clone().ok_or_else(|| Error::UnknownSession("<none>".into()))
}

#[instrument(level = "info", skip(state, session_id))]
async fn handle_client_ws(
  msg: ClientWsMessage,
  state: &AppState,
  session_id: &mut Option<String>,
) -> Result<ServerWsMessage> {
  let reply = match msg {
    ClientWsMessage::Ping => ServerWsMessage::Pong,

    ClientWsMessage::Questionnaire => ServerWsMessage::Questionnaire { questionnaire: questionnaire_out() },

    ClientWsMessage::Attach { session_id: target } => {
      let session = state.get_session(&target).await?;
      info!(target: "session", id = %target, "WS attached to session");
      *session_id = Some(target);
      ServerWsMessage::Session { session: session_out(&session) }
    }

    ClientWsMessage::GetState => {
      let session = state.get_session(&current(session_id)?).await?;
      ServerWsMessage::Session { session: session_out(&session) }
    }

    ClientWsMessage::Start => {
      let session = state.start(&current(session_id)?).await?;
      ServerWsMessage::Session { session: session_out(&session) }
    }

    ClientWsMessage::SetRank { question_index, tag, value } => {
      let session = state.record_rank(&current(session_id)?, question_index, tag, value).await?;
      ServerWsMessage::Session { session: session_out(&session) }
    }

    ClientWsMessage::Submit => {
      let (_, result) = state.submit(&current(session_id)?).await?;
      ServerWsMessage::Result { result: result_out(&result) }
    }

    ClientWsMessage::Reset => {
      let session = state.reset(&current(session_id)?).await?;
      ServerWsMessage::Session { session: session_out(&session) }
    }
  };
  Ok(reply)
}
