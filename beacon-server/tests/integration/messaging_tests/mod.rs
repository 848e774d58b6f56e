mod test_sender_id_cannot_be_spoofed;
